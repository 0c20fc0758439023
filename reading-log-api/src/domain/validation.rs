use time::{macros::format_description, Date};

use super::{
    models::{EntryDraft, EntryFields},
    EntryError, PageField,
};

/// Inclusive bounds for page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub min: u32,
    pub max: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self { min: 1, max: 1000 }
    }
}

impl PageLimits {
    fn parse(&self, field: PageField, value: &str) -> Result<u32, EntryError> {
        let page: i64 = value.parse().map_err(|_| EntryError::PageNotNumeric {
            field,
            value: value.to_string(),
        })?;

        u32::try_from(page)
            .ok()
            .filter(|page| (self.min..=self.max).contains(page))
            .ok_or(EntryError::PageOutOfRange {
                field,
                min: self.min,
                max: self.max,
            })
    }
}

impl EntryDraft {
    /// Check the draft and turn it into storable fields.
    pub fn validate(self, limits: &PageLimits) -> Result<EntryFields, EntryError> {
        if self.title.trim().is_empty() {
            return Err(EntryError::TitleRequired);
        }
        if self.author.trim().is_empty() {
            return Err(EntryError::AuthorRequired);
        }

        let date = parse_date(&self.date)?;

        let page = self
            .page
            .as_deref()
            .map(|value| limits.parse(PageField::Page, value))
            .transpose()?;
        let page_end = self
            .page_end
            .as_deref()
            .map(|value| limits.parse(PageField::PageEnd, value))
            .transpose()?;

        if let (Some(start), Some(end)) = (page, page_end) {
            if end < start {
                return Err(EntryError::PageEndBeforeStart);
            }
        }

        if page.is_none() && self.chapter.is_none() && self.section.is_none() {
            return Err(EntryError::PositionRequired);
        }

        Ok(EntryFields {
            title: self.title,
            author: self.author,
            date,
            page,
            page_end,
            chapter: self.chapter,
            chapter_end: self.chapter_end,
            section: self.section,
            section_end: self.section_end,
            comment: self.comment,
        })
    }
}

fn parse_date(value: &str) -> Result<Date, EntryError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).map_err(|_| EntryError::InvalidDate(value.to_string()))
}

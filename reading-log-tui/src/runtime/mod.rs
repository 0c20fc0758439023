mod effects;
mod event_loop;
mod events;
mod keys;
mod update;

pub use event_loop::run_app;

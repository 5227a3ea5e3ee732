pub mod handoff_queue;

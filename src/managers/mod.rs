// Managers: components that own persisted collections.

pub mod search_history;
pub mod video_store;

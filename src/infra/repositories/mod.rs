pub mod in_memory_reservation_repo;
pub mod in_memory_slot_index_repo;

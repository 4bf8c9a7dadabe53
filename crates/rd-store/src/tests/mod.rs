mod memory_storage;

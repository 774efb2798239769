mod mapping_repo;

pub use mapping_repo::DieselMappingRepository;

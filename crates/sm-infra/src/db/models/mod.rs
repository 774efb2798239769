mod sample_mapping_row;

pub use sample_mapping_row::SampleMappingRow;

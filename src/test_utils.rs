#[cfg(test)]
pub mod test_helpers {
    use crate::catalog::{
        EngineeringType, MemoryCatalog, ParameterMetadata, ParameterSummary, ParameterTypeInfo,
    };

    /// Metadata record with the short name derived from the qualified name
    pub fn metadata(qualified_name: &str, eng_type: EngineeringType) -> ParameterMetadata {
        ParameterMetadata {
            name: short_name(qualified_name).to_string(),
            qualified_name: qualified_name.to_string(),
            short_description: None,
            long_description: None,
            parameter_type: Some(ParameterTypeInfo { eng_type }),
            units: None,
        }
    }

    /// Metadata record with no declared engineering type
    pub fn untyped_metadata(qualified_name: &str) -> ParameterMetadata {
        ParameterMetadata {
            name: short_name(qualified_name).to_string(),
            qualified_name: qualified_name.to_string(),
            short_description: None,
            long_description: None,
            parameter_type: None,
            units: None,
        }
    }

    /// Search-result record for a bare qualified name
    pub fn summary(qualified_name: &str) -> ParameterSummary {
        ParameterSummary {
            name: short_name(qualified_name).to_string(),
            qualified_name: qualified_name.to_string(),
            short_description: None,
            long_description: None,
            parameter_type: None,
        }
    }

    /// Small spacecraft catalog used across the test suite
    pub fn test_catalog() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            metadata("/YSS/SIMULATOR/BatteryVoltage1", EngineeringType::Float),
            metadata("/YSS/SIMULATOR/BatteryVoltage2", EngineeringType::Float),
            metadata("/YSS/SIMULATOR/BatteryTemp1", EngineeringType::Integer),
            metadata("/YSS/SIMULATOR/Mode", EngineeringType::Enumeration),
            metadata("/YSS/ops/MissionPhase", EngineeringType::String),
        ])
    }

    fn short_name(qualified_name: &str) -> &str {
        match qualified_name.rfind('/') {
            Some(idx) => &qualified_name[idx + 1..],
            None => qualified_name,
        }
    }
}

use mentor_core::CoreFlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de flujo: {0}")]
    Flow(#[from] CoreFlowError),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error interno: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_variant_from() {
        let err: CoreError = CoreFlowError::FlowCompleted.into();
        assert!(matches!(err, CoreError::Flow(CoreFlowError::FlowCompleted)));
        assert!(err.to_string().starts_with("Error de flujo: "));
    }

    #[test]
    fn test_config_variant_format() {
        let err = CoreError::Config("mala configuración".into());
        assert_eq!(err.to_string(), "Error de configuración: mala configuración");
    }

    #[test]
    fn test_serialization_variant_from() {
        let json_err = serde_json::from_str::<u32>("no-json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}

//! Resolve a parsed configuration into the runtime configuration the query builder
//! executes queries with.

use std::time::Duration;

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ApiKey, EndpointUri, Secret};
use crate::version1::ParsedConfiguration;

/// Convert the parsed configuration into a runtime configuration, resolving secrets from
/// `environment` on the way.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let EndpointUri(endpoint_secret) = &parsed_config.execution_endpoint;
    let endpoint = resolve(endpoint_secret, &environment)?;
    let execution_endpoint =
        url::Url::parse(&endpoint).map_err(|err| MakeRuntimeConfigurationError::InvalidEndpointUri {
            uri: endpoint.clone(),
            message: err.to_string(),
        })?;

    let api_key = match &parsed_config.api_key {
        None => None,
        Some(ApiKey(secret)) => Some(resolve(secret, &environment)?),
    };

    if parsed_config.execution_settings.timeout == 0 {
        return Err(MakeRuntimeConfigurationError::InvalidTimeout);
    }

    Ok(Configuration {
        execution_endpoint,
        api_key,
        execution_timeout: Duration::from_secs(parsed_config.execution_settings.timeout),
    })
}

fn resolve(
    secret: &Secret,
    environment: impl Environment,
) -> Result<String, MakeRuntimeConfigurationError> {
    secret.resolve(environment).map_err(|err| {
        let variable = match secret {
            Secret::FromEnvironment { variable } => variable.clone(),
            Secret::Plain(_) => String::new(),
        };
        MakeRuntimeConfigurationError::MissingEnvironmentVariable {
            variable,
            message: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;
    use crate::values::ExecutionSettings;
    use crate::version1::{self, Version};

    fn parsed(endpoint: Secret) -> ParsedConfiguration {
        ParsedConfiguration {
            version: Version::This,
            schema: None,
            execution_endpoint: EndpointUri(endpoint),
            api_key: None,
            execution_settings: ExecutionSettings::default(),
        }
    }

    #[test]
    fn plain_values_need_no_environment() {
        let configuration = make_runtime_configuration(
            parsed("http://localhost:3001/api/query/execute".into()),
            FixedEnvironment::default(),
        )
        .unwrap();

        assert_eq!(
            configuration.execution_endpoint.as_str(),
            "http://localhost:3001/api/query/execute"
        );
        assert_eq!(configuration.api_key, None);
        assert_eq!(configuration.execution_timeout, Duration::from_secs(30));
    }

    #[test]
    fn secrets_come_from_the_environment() {
        let configuration = make_runtime_configuration(
            ParsedConfiguration::initial(),
            FixedEnvironment::from([
                (
                    version1::DEFAULT_EXECUTION_ENDPOINT_VARIABLE.into(),
                    "https://dashboards.example.com/api/query/execute".to_string(),
                ),
                (
                    version1::DEFAULT_API_KEY_VARIABLE.into(),
                    "secret-key".to_string(),
                ),
            ]),
        )
        .unwrap();

        assert_eq!(
            configuration.execution_endpoint.host_str(),
            Some("dashboards.example.com")
        );
        assert_eq!(configuration.api_key.as_deref(), Some("secret-key"));
    }

    #[test]
    fn missing_variables_are_named() {
        let error =
            make_runtime_configuration(ParsedConfiguration::initial(), FixedEnvironment::default())
                .unwrap_err();

        assert!(matches!(
            error,
            MakeRuntimeConfigurationError::MissingEnvironmentVariable { ref variable, .. }
                if variable == version1::DEFAULT_EXECUTION_ENDPOINT_VARIABLE
        ));
    }

    #[test]
    fn endpoints_must_be_urls() {
        let error = make_runtime_configuration(
            parsed("localhost:3001 /execute".into()),
            FixedEnvironment::default(),
        )
        .unwrap_err();

        assert!(matches!(
            error,
            MakeRuntimeConfigurationError::InvalidEndpointUri { .. }
        ));
    }

    #[test]
    fn a_zero_timeout_is_refused() {
        let mut configuration = parsed("http://localhost:3001/execute".into());
        configuration.execution_settings.timeout = 0;

        let error =
            make_runtime_configuration(configuration, FixedEnvironment::default()).unwrap_err();

        assert!(matches!(error, MakeRuntimeConfigurationError::InvalidTimeout));
    }
}

//! Manifest entity - the services to create before a push
//!
//! A manifest is built once per invocation and never mutated afterwards.

/// One service requested by the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Instance name requested from the platform
    name: String,
    /// Service offering to provision from
    broker: String,
    /// Service plan (tier)
    plan: String,
    /// Opaque JSON passed to `create-service -c`; empty when absent
    parameters: String,
}

impl ServiceSpec {
    pub fn new(
        name: impl Into<String>,
        broker: impl Into<String>,
        plan: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            broker: broker.into(),
            plan: plan.into(),
            parameters: String::new(),
        }
    }

    /// Attach configuration parameters (JSON text)
    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = parameters.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn broker(&self) -> &str {
        &self.broker
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Arguments for the platform's `create-service` command
    ///
    /// `create-service <broker> <plan> <name> [-c <parameters>]`
    pub fn create_command(&self) -> Vec<String> {
        let mut args = vec![
            "create-service".to_string(),
            self.broker.clone(),
            self.plan.clone(),
            self.name.clone(),
        ];
        if self.has_parameters() {
            args.push("-c".to_string());
            args.push(self.parameters.clone());
        }
        args
    }
}

/// Ordered list of services, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    services: Vec<ServiceSpec>,
}

impl Manifest {
    pub fn new(services: Vec<ServiceSpec>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &[ServiceSpec] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ServiceSpec;
    type IntoIter = std::slice::Iter<'a, ServiceSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_command_without_parameters() {
        let spec = ServiceSpec::new("db1", "mysql", "free");
        assert_eq!(
            spec.create_command(),
            vec!["create-service", "mysql", "free", "db1"]
        );
    }

    #[test]
    fn create_command_appends_parameters_flag() {
        let spec = ServiceSpec::new("db1", "mysql", "free").with_parameters(r#"{"size":2}"#);
        assert_eq!(
            spec.create_command(),
            vec!["create-service", "mysql", "free", "db1", "-c", r#"{"size":2}"#]
        );
    }

    #[test]
    fn manifest_preserves_order() {
        let manifest = Manifest::new(vec![
            ServiceSpec::new("b", "x", "p"),
            ServiceSpec::new("a", "x", "p"),
        ]);
        let names: Vec<_> = manifest.into_iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}

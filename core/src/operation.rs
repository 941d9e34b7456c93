use std::collections::{HashMap, HashSet};

use crate::{Classifier, Error, ErrorFormat, Fallback, OutcomeKind, OutcomePolicy, Result};

/// Per-operation classification context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationContext {
    exempt_codes: HashSet<String>,
    benign_illegal_state: bool,
}

impl OperationContext {
    /// Exempt a provider error code: failures carrying it are benign.
    pub fn exempt(mut self, code: impl Into<String>) -> Self {
        self.exempt_codes.insert(code.into());
        self
    }

    /// Check if the code is exempted.
    pub fn is_exempt(&self, code: &str) -> bool {
        self.exempt_codes.contains(code)
    }

    /// Treat client-side illegal state failures as benign.
    pub fn benign_illegal_state(mut self) -> Self {
        self.benign_illegal_state = true;
        self
    }

    /// Check if illegal state failures are benign for this operation.
    pub fn is_illegal_state_benign(&self) -> bool {
        self.benign_illegal_state
    }
}

/// OperationSpec declares how one named operation treats failures.
///
/// ```
/// use cloudreq_core::{Fallback, OperationSpec, OutcomeKind};
///
/// let spec = OperationSpec::new("create_bucket")
///     .exempt("BucketAlreadyOwnedByYou")
///     .on(OutcomeKind::KnownBenignFailure, Fallback::False);
/// assert_eq!(spec.name(), "create_bucket");
/// ```
#[derive(Debug, Clone)]
pub struct OperationSpec {
    name: String,
    error_format: Option<ErrorFormat>,
    context: OperationContext,
    policy: OutcomePolicy,
}

impl OperationSpec {
    /// Create an operation that propagates every failure.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error_format: None,
            context: OperationContext::default(),
            policy: OutcomePolicy::default(),
        }
    }

    /// Exempt a provider error code.
    pub fn exempt(mut self, code: impl Into<String>) -> Self {
        self.context = self.context.exempt(code);
        self
    }

    /// Treat client-side illegal state failures as benign.
    pub fn benign_illegal_state(mut self) -> Self {
        self.context = self.context.benign_illegal_state();
        self
    }

    /// Map an outcome kind to a fallback value.
    pub fn on(mut self, kind: OutcomeKind, fallback: Fallback) -> Self {
        self.policy = self.policy.on(kind, fallback);
        self
    }

    /// Override the table's error format for this operation.
    pub fn with_error_format(mut self, format: ErrorFormat) -> Self {
        self.error_format = Some(format);
        self
    }

    /// Operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classification context.
    pub fn context(&self) -> &OperationContext {
        &self.context
    }

    /// Resolution policy.
    pub fn policy(&self) -> &OutcomePolicy {
        &self.policy
    }

    /// Error format override.
    pub fn error_format(&self) -> Option<ErrorFormat> {
        self.error_format
    }
}

/// OperationTable holds every operation a provider binding declares.
///
/// Tables are plain values built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct OperationTable {
    classifier: Classifier,
    error_format: ErrorFormat,
    operations: HashMap<String, OperationSpec>,
}

impl OperationTable {
    /// Create an empty table.
    pub fn new(classifier: Classifier, error_format: ErrorFormat) -> Self {
        Self {
            classifier,
            error_format,
            operations: HashMap::new(),
        }
    }

    /// Add an operation, replacing one with the same name.
    pub fn with_operation(mut self, spec: OperationSpec) -> Self {
        self.operations.insert(spec.name.clone(), spec);
        self
    }

    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Result<&OperationSpec> {
        self.operations
            .get(name)
            .ok_or_else(|| Error::config_invalid(format!("operation {name} is not declared")))
    }

    /// The classifier shared by all operations.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Error format used by the given operation.
    pub fn error_format_of(&self, spec: &OperationSpec) -> ErrorFormat {
        spec.error_format.unwrap_or(self.error_format)
    }

    /// Names of declared operations, sorted.
    pub fn operation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn table() -> OperationTable {
        OperationTable::new(Classifier::default(), ErrorFormat::S3Xml)
            .with_operation(
                OperationSpec::new("create_bucket")
                    .exempt("BucketAlreadyOwnedByYou")
                    .on(OutcomeKind::KnownBenignFailure, Fallback::False),
            )
            .with_operation(
                OperationSpec::new("list").with_error_format(ErrorFormat::PlainText),
            )
    }

    #[test]
    fn test_lookup() -> Result<()> {
        let table = table();

        let spec = table.get("create_bucket")?;
        assert!(spec.context().is_exempt("BucketAlreadyOwnedByYou"));
        assert!(!spec.context().is_exempt("BucketAlreadyExists"));
        assert_eq!(
            spec.policy().fallback(OutcomeKind::KnownBenignFailure),
            Some(Fallback::False)
        );
        assert_eq!(spec.policy().fallback(OutcomeKind::NotFound), None);
        assert_eq!(table.error_format_of(spec), ErrorFormat::S3Xml);
        assert_eq!(
            table.error_format_of(table.get("list")?),
            ErrorFormat::PlainText
        );
        assert_eq!(table.operation_names(), vec!["create_bucket", "list"]);
        Ok(())
    }

    #[test]
    fn test_unknown_operation() {
        let err = table().get("drop_everything").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.to_string().contains("drop_everything"));
    }
}

//! Operations exposed by the EC2 query binding and how each treats failures.

use cloudreq_core::{
    Classifier, ErrorFormat, Fallback, OperationSpec, OperationTable, OutcomeKind,
};

/// `Action=DescribeInstances`
pub const DESCRIBE_INSTANCES: &str = "describe_instances";
/// `Action=RunInstances`
pub const RUN_INSTANCES: &str = "run_instances";
/// `Action=CreateKeyPair`, returns `false` if the key pair exists.
pub const CREATE_KEY_PAIR: &str = "create_key_pair";
/// `Action=CreateSecurityGroup`, returns `false` if the group exists.
pub const CREATE_SECURITY_GROUP: &str = "create_security_group";
/// `Action=DeleteSecurityGroup`, succeeds if the group is already gone.
pub const DELETE_SECURITY_GROUP: &str = "delete_security_group";

/// Build the EC2 operation table.
pub fn table() -> OperationTable {
    let classifier = Classifier::default()
        .with_retryable_code("RequestLimitExceeded")
        .with_retryable_code("Unavailable")
        .with_not_found_code("InvalidInstanceID.NotFound");

    OperationTable::new(classifier, ErrorFormat::Ec2Xml)
        .with_operation(OperationSpec::new(DESCRIBE_INSTANCES))
        .with_operation(OperationSpec::new(RUN_INSTANCES))
        .with_operation(
            OperationSpec::new(CREATE_KEY_PAIR)
                .exempt("InvalidKeyPair.Duplicate")
                .on(OutcomeKind::KnownBenignFailure, Fallback::False),
        )
        .with_operation(
            OperationSpec::new(CREATE_SECURITY_GROUP)
                .exempt("InvalidGroup.Duplicate")
                .on(OutcomeKind::KnownBenignFailure, Fallback::False),
        )
        .with_operation(
            OperationSpec::new(DELETE_SECURITY_GROUP)
                .exempt("InvalidGroup.NotFound")
                .on(OutcomeKind::KnownBenignFailure, Fallback::Void),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(CREATE_KEY_PAIR, "InvalidKeyPair.Duplicate", Some(Fallback::False))]
    #[test_case(CREATE_SECURITY_GROUP, "InvalidGroup.Duplicate", Some(Fallback::False))]
    #[test_case(DELETE_SECURITY_GROUP, "InvalidGroup.NotFound", Some(Fallback::Void))]
    #[test_case(RUN_INSTANCES, "InvalidKeyPair.Duplicate", None)]
    fn test_benign_codes(op: &str, code: &str, fallback: Option<Fallback>) {
        let table = table();
        let spec = table.get(op).unwrap();

        assert_eq!(spec.context().is_exempt(code), fallback.is_some());
        assert_eq!(
            spec.policy().fallback(OutcomeKind::KnownBenignFailure),
            fallback
        );
    }
}

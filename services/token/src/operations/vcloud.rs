//! vCloud and Terremark operations.

use cloudreq_core::{
    Classifier, ErrorFormat, Fallback, OperationSpec, OperationTable, OutcomeKind,
};

/// `GET /catalog/{id}`
pub const GET_CATALOG: &str = "get_catalog";
/// `GET /vApp/{id}`, `None` if missing.
pub const GET_VAPP: &str = "get_vapp";
/// `DELETE /InternetServices/{id}`, succeeds if the service is gone.
pub const DELETE_INTERNET_SERVICE: &str = "delete_internet_service";

/// Build the vCloud operation table.
pub fn table() -> OperationTable {
    OperationTable::new(Classifier::default(), ErrorFormat::VCloudXml)
        .with_operation(OperationSpec::new(GET_CATALOG))
        .with_operation(OperationSpec::new(GET_VAPP).on(OutcomeKind::NotFound, Fallback::Null))
        .with_operation(
            OperationSpec::new(DELETE_INTERNET_SERVICE).on(OutcomeKind::NotFound, Fallback::Void),
        )
}

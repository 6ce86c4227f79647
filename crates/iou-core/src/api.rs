//! Remote-call surface for IOU operations
//!
//! Mounted under `/api/iou`. No endpoints are defined yet; the type only
//! binds the routing prefix to the ledger service handle it will delegate to.

/// Handle to the external ledger-operations service
pub trait LedgerRpcOps {}

/// IOU API root, relative paths hang off [`IouApi::PATH`]
pub struct IouApi<'a, S: LedgerRpcOps + ?Sized> {
    services: &'a S,
}

impl<'a, S: LedgerRpcOps + ?Sized> IouApi<'a, S> {
    pub const PATH: &'static str = "iou";

    pub fn new(services: &'a S) -> Self {
        IouApi { services }
    }

    pub fn path(&self) -> &'static str {
        Self::PATH
    }

    pub fn services(&self) -> &'a S {
        self.services
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullOps;
    impl LedgerRpcOps for NullOps {}

    #[test]
    fn test_api_mounted_under_iou() {
        let ops = NullOps;
        let api = IouApi::new(&ops);
        assert_eq!(api.path(), "iou");
        assert!(std::ptr::eq(api.services(), &ops));
    }

    #[test]
    fn test_api_accepts_trait_object_handle() {
        let ops: &dyn LedgerRpcOps = &NullOps;
        let api = IouApi::new(ops);
        assert_eq!(api.path(), IouApi::<dyn LedgerRpcOps>::PATH);
    }
}

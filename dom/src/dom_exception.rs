use thiserror::Error;

// SPECLINK: https://webidl.spec.whatwg.org/#idl-DOMException
#[derive(Error, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
#[error("{name:?}: {message}")]
pub struct DomException {
    pub name: ErrorName,
    pub message: &'static str,
    pub code: u16,
}

impl DomException {
    pub const HIERARCHY_REQUEST_ERR: u16 = 3;
    pub const NOT_FOUND_ERR: u16 = 8;

    fn new(name: ErrorName, message: &'static str, code: u16) -> Self {
        Self {
            name,
            message,
            code,
        }
    }
}

impl From<ErrorName> for DomException {
    fn from(value: ErrorName) -> Self {
        match value {
            ErrorName::HierarchyRequestError => DomException::new(
                value,
                "The operation would yield an incorrect node tree.",
                DomException::HIERARCHY_REQUEST_ERR,
            ),
            ErrorName::NotFoundError => DomException::new(
                value,
                "The object can not be found here.",
                DomException::NOT_FOUND_ERR,
            ),
        }
    }
}

// SPECLINK: https://webidl.spec.whatwg.org/#dfn-error-names-table
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum ErrorName {
    HierarchyRequestError,
    NotFoundError,
}

#[cfg(test)]
mod tests {
    use super::{DomException, ErrorName};

    #[test]
    fn legacy_codes() {
        let exception = DomException::from(ErrorName::NotFoundError);
        assert_eq!(exception.code, DomException::NOT_FOUND_ERR);
        assert_eq!(
            exception.to_string(),
            "NotFoundError: The object can not be found here."
        );

        let exception = DomException::from(ErrorName::HierarchyRequestError);
        assert_eq!(exception.code, 3);
    }
}

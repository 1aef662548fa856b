use error_derive::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Something tried to change a [Point](crate::Point) after it was created
    #[msg = "cannot assign to attribute `{attribute}`: point is immutable"]
    ImmutabilityViolation { attribute: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_attribute() {
        let error = Error::ImmutabilityViolation {
            attribute: "x".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "cannot assign to attribute `x`: point is immutable"
        );
    }

    #[test]
    fn has_no_source() {
        let error = Error::ImmutabilityViolation {
            attribute: "y".to_string(),
        };

        assert!(std::error::Error::source(&error).is_none());
    }
}

use validator::{Validate, ValidationErrors};
use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(describe)
}

fn describe(err: ValidationErrors) -> AppError {
    let mut fields: Vec<String> = err
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let errors = errs
                .iter()
                .map(|e| match e.message.as_deref() {
                    Some(message) => format!("{}: {}", e.code, message),
                    None => e.code.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, errors)
        })
        .collect();
    fields.sort();
    AppError::BadRequest(format!("Validation failed: {}", fields.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::CreateUserRequest;

    #[test]
    fn empty_wallet_address_is_rejected() {
        let request = CreateUserRequest { wallet_address: String::new() };
        match validate_payload(&request) {
            Err(AppError::BadRequest(msg)) => {
                assert!(msg.starts_with("Validation failed"));
                assert!(msg.contains("wallet"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let request = CreateUserRequest { wallet_address: "w1".to_string() };
        assert!(validate_payload(&request).is_ok());
    }
}

//! Pure validation predicates called by the CLI layer in its retry loops.

/// A CPF is accepted as exactly eleven ASCII digits. No check-digit
/// verification is performed; any eleven-digit string passes.
pub fn is_valid_cpf(cpf: &str) -> bool {
    cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit())
}

/// A CEP is accepted as exactly eight ASCII digits.
pub fn is_valid_cep(cep: &str) -> bool {
    cep.len() == 8 && cep.bytes().all(|b| b.is_ascii_digit())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_eleven_digit_cpf() {
        assert!(is_valid_cpf("12345678901"));
    }

    #[test]
    fn should_reject_short_cpf() {
        assert!(!is_valid_cpf("1234567890"));
    }

    #[test]
    fn should_reject_cpf_with_letter() {
        assert!(!is_valid_cpf("1234567a901"));
    }

    #[test]
    fn should_reject_cpf_with_non_ascii_digit() {
        // Same byte length as eleven ASCII digits is not enough.
        assert!(!is_valid_cpf("١٢٣٤٥٦٧٨٩٠١"));
    }

    #[test]
    fn should_validate_cep() {
        assert!(is_valid_cep("01310100"));
        assert!(!is_valid_cep("01310-100"));
        assert!(!is_valid_cep("0131010"));
    }
}

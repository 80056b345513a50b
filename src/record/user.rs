//! Registered citizen record.

/// One row in the user registry. Uniqueness is enforced on the CPF only;
/// a duplicate registration is silently ignored by the store.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub full_name: String,
    pub cpf: String,
    pub disability: String,
    pub cep: String,
    pub address: String,
    pub needs_rescue: bool,
}

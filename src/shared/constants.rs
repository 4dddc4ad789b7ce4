// =============================================================================
// ENDPOINT MESSAGES
// =============================================================================

/// Body message of a successful `POST /submit`
pub const STORE_SUCCESS_MESSAGE: &str = "Dados armazenados com sucesso!";

/// Body error of any failed `POST /submit`
pub const STORE_FAILURE_MESSAGE: &str = "Erro ao armazenar os dados";

/// Body error of a failed `GET /users/all`
pub const LIST_FAILURE_MESSAGE: &str = "Erro ao buscar os usuários";

// =============================================================================
// FORM LIMITS
// =============================================================================

/// Minimum age accepted by the signup form
pub const MINIMUM_AGE_YEARS: u32 = 18;

/// Digits in a CEP (Brazilian postal code)
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Digits in a CPF
pub const CPF_DIGITS: usize = 11;

/// Digits in a CNPJ
pub const CNPJ_DIGITS: usize = 14;

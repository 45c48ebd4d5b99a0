//! Authentication service - registration, credential verification, and
//! token issuance.
//!
//! # Login outcomes
//!
//! A login attempt moves Received → Verifying → Granted or Denied. Denied
//! covers both an unknown identity and a wrong password, and the response
//! is identical for both: callers must not be able to probe which accounts
//! exist.
//!
//! # Registration
//!
//! Validation collects every applicable violation and reports them
//! together; it never stops at the first error.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use crate::{
    config::Config,
    db::DbPool,
    error::AppError,
    models::{
        claims::Claims,
        user::{AuthResponse, AuthenticatedPrincipal, RegisterRequest, RegisterResponse, User},
    },
};

/// bcrypt cost factor for newly stored credentials.
const BCRYPT_COST: u32 = 10;

/// Maximum length of the name fields.
const MAX_NAME_LENGTH: usize = 256;

/// Register a new identity.
///
/// # Process
///
/// 1. Validate all fields, collecting every violation
/// 2. If uniqueness is enforced, check the email is unused (case-insensitive)
/// 3. Report the combined violation list, or hash the password and insert
///
/// The stored username is the email, mirroring the login lookup which
/// accepts either. A concurrent duplicate registration that slips past the
/// pre-check is caught by the unique index and reported as the same
/// uniqueness violation; no identity row is created on any failure.
pub async fn register(
    pool: &DbPool,
    config: &Config,
    request: RegisterRequest,
) -> Result<RegisterResponse, AppError> {
    let mut errors = validate_registration(&request, config.min_password_length);

    if config.require_unique_email && !request.email.trim().is_empty() {
        let email_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
                .bind(&request.email)
                .fetch_one(pool)
                .await?;

        if email_taken {
            errors.push(format!("Email '{}' is already taken.", request.email));
        }
    }

    if !errors.is_empty() {
        tracing::warn!(email = %request.email, "registration failed validation");
        return Err(AppError::Validation(errors));
    }

    let password_hash = bcrypt::hash(&request.password, BCRYPT_COST)?;

    // Empty last names are stored as NULL
    let last_name = request.last_name.as_deref().filter(|s| !s.trim().is_empty());

    let inserted = sqlx::query_as::<_, (Uuid, String)>(
        r#"
        INSERT INTO users (email, username, password_hash, first_name, last_name)
        VALUES ($1, $1, $2, $3, $4)
        RETURNING id, email
        "#,
    )
    .bind(&request.email)
    .bind(&password_hash)
    .bind(&request.first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await;

    match inserted {
        Ok((id, email)) => {
            tracing::info!(%id, "new identity registered");
            Ok(RegisterResponse { id, email })
        }
        // Lost race against a concurrent registration with the same email
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(AppError::Validation(vec![format!(
                "Email '{}' is already taken.",
                request.email
            )]))
        }
        Err(err) => Err(err.into()),
    }
}

/// Verify credentials and issue a signed bearer token.
///
/// # Process
///
/// 1. Look up the identity by email or username, case-insensitively
/// 2. Verify the password against the stored bcrypt hash
/// 3. Gather role names and supplemental claims
/// 4. Assemble the claim set and sign it (HS256)
///
/// Unknown identity and wrong password both produce the same
/// `AuthenticationFailed` error.
pub async fn login(
    pool: &DbPool,
    config: &Config,
    name: &str,
    password: &str,
) -> Result<AuthResponse, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, password_hash, first_name, last_name
        FROM users
        WHERE LOWER(email) = LOWER($1) OR LOWER(username) = LOWER($1)
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    let Some(user) = user else {
        tracing::warn!(user = %name, "login failed");
        return Err(AppError::AuthenticationFailed);
    };

    if !bcrypt::verify(password, &user.password_hash)? {
        tracing::warn!(user = %name, "login failed");
        return Err(AppError::AuthenticationFailed);
    }

    let roles: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT r.name
        FROM roles r
        JOIN user_roles ur ON ur.role_id = r.id
        WHERE ur.user_id = $1
        "#,
    )
    .bind(user.id)
    .fetch_all(pool)
    .await?;

    let supplemental: Vec<(String, String)> =
        sqlx::query_as("SELECT claim_type, claim_value FROM user_claims WHERE user_id = $1")
            .bind(user.id)
            .fetch_all(pool)
            .await?;

    let principal = AuthenticatedPrincipal::from_user(&user, roles, supplemental);

    issue_token(&principal, config, Utc::now())
}

/// Assemble the claim set for a verified principal.
///
/// Pure function of its inputs: the validity window is `now` to
/// `now + expiration_minutes`, the token id is freshly random, and the
/// family name falls back to an empty string.
pub fn build_claims(
    principal: &AuthenticatedPrincipal,
    issuer: &str,
    audience: &str,
    expiration_minutes: i64,
    now: DateTime<Utc>,
) -> Claims {
    let expires_at = now + Duration::minutes(expiration_minutes);

    Claims {
        sid: principal.id,
        sub: principal.username.clone(),
        jti: Uuid::new_v4(),
        unique_name: principal.username.clone(),
        email: principal.email.clone(),
        given_name: principal.first_name.clone(),
        family_name: principal.last_name.clone().unwrap_or_default(),
        roles: principal.roles.clone(),
        nbf: now.timestamp(),
        exp: expires_at.timestamp(),
        iss: issuer.to_string(),
        aud: audience.to_string(),
        extra: principal
            .claims
            .iter()
            .map(|(claim_type, claim_value)| (claim_type.clone(), claim_value.clone().into()))
            .collect(),
    }
}

/// Sign the principal's claims and return the encoded token with its expiry.
pub fn issue_token(
    principal: &AuthenticatedPrincipal,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<AuthResponse, AppError> {
    let claims = build_claims(
        principal,
        &config.jwt_issuer,
        &config.jwt_audience,
        config.jwt_expiration_minutes,
        now,
    );

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_security_key.as_bytes()),
    )?;

    Ok(AuthResponse {
        token,
        expires_at: now + Duration::minutes(config.jwt_expiration_minutes),
    })
}

/// Validate a registration request, collecting ALL violations.
///
/// Field rules:
/// - email: required, must look like an e-mail address
/// - password: at least `min_password_length` characters
/// - first name: required, at most 256 characters
/// - last name: optional, at most 256 characters
pub fn validate_registration(request: &RegisterRequest, min_password_length: usize) -> Vec<String> {
    let mut errors = Vec::new();

    let email = request.email.trim();
    if email.is_empty() {
        errors.push("The Email field is required.".to_string());
    } else if !is_valid_email(email) {
        errors.push("The Email field is not a valid e-mail address.".to_string());
    }

    if request.password.chars().count() < min_password_length {
        errors.push(format!(
            "Passwords must be at least {min_password_length} characters."
        ));
    }

    if request.first_name.trim().is_empty() {
        errors.push("The FirstName field is required.".to_string());
    } else if request.first_name.chars().count() > MAX_NAME_LENGTH {
        errors.push(format!(
            "The field FirstName must be a string with a maximum length of {MAX_NAME_LENGTH}."
        ));
    }

    if let Some(last_name) = &request.last_name {
        if last_name.chars().count() > MAX_NAME_LENGTH {
            errors.push(format!(
                "The field LastName must be a string with a maximum length of {MAX_NAME_LENGTH}."
            ));
        }
    }

    errors
}

/// Minimal e-mail shape check: exactly one `@`, non-empty on both sides,
/// no whitespace.
fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

    fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            server_port: 3000,
            jwt_security_key: "unit-test-signing-key".to_string(),
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
            jwt_expiration_minutes: 30,
            min_password_length: 6,
            require_unique_email: true,
        }
    }

    fn test_principal() -> AuthenticatedPrincipal {
        AuthenticatedPrincipal {
            id: Uuid::new_v4(),
            username: "maria@example.com".to_string(),
            email: "maria@example.com".to_string(),
            first_name: "Maria".to_string(),
            last_name: None,
            roles: vec!["Admin".to_string()],
            claims: vec![("favorite_dish".to_string(), "carbonara".to_string())],
        }
    }

    #[test]
    fn claims_carry_identity_and_validity_window() {
        let principal = test_principal();
        let now = Utc::now();

        let claims = build_claims(&principal, "test-issuer", "test-audience", 30, now);

        assert_eq!(claims.sid, principal.id);
        assert_eq!(claims.sub, "maria@example.com");
        assert_eq!(claims.unique_name, "maria@example.com");
        assert_eq!(claims.given_name, "Maria");
        // No last name becomes an empty string, never a missing claim
        assert_eq!(claims.family_name, "");
        assert_eq!(claims.roles, vec!["Admin".to_string()]);
        assert_eq!(claims.extra["favorite_dish"], "carbonara");
        // Expiry is exactly the configured delta after not-valid-before
        assert_eq!(claims.exp - claims.nbf, 30 * 60);
    }

    #[test]
    fn each_token_gets_a_fresh_identifier() {
        let principal = test_principal();
        let now = Utc::now();

        let first = build_claims(&principal, "i", "a", 30, now);
        let second = build_claims(&principal, "i", "a", 30, now);

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn issued_token_decodes_under_issuer_and_audience_validation() {
        let config = test_config();
        let principal = test_principal();
        let now = Utc::now();

        let response = issue_token(&principal, &config, now).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);

        let decoded = decode::<Claims>(
            &response.token,
            &DecodingKey::from_secret(config.jwt_security_key.as_bytes()),
            &validation,
        )
        .unwrap();

        assert_eq!(decoded.claims.sid, principal.id);
        assert_eq!(decoded.claims.sub, principal.username);
        assert_eq!(decoded.claims.exp, response.expires_at.timestamp());
    }

    #[test]
    fn validation_collects_every_violation() {
        let request = RegisterRequest {
            email: "".to_string(),
            password: "abc".to_string(),
            first_name: "".to_string(),
            last_name: None,
        };

        let errors = validate_registration(&request, 6);

        // Empty email, short password, missing first name: all reported
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("Email")));
        assert!(errors.iter().any(|e| e.contains("Passwords")));
        assert!(errors.iter().any(|e| e.contains("FirstName")));
    }

    #[test]
    fn valid_request_produces_no_errors() {
        let request = RegisterRequest {
            email: "maria@example.com".to_string(),
            password: "s3cret!".to_string(),
            first_name: "Maria".to_string(),
            last_name: Some("Rossi".to_string()),
        };

        assert!(validate_registration(&request, 6).is_empty());
    }

    #[test]
    fn overlong_names_are_rejected() {
        let request = RegisterRequest {
            email: "maria@example.com".to_string(),
            password: "s3cret!".to_string(),
            first_name: "x".repeat(257),
            last_name: Some("y".repeat(257)),
        };

        let errors = validate_registration(&request, 6);

        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("maria@example.com"));
        assert!(!is_valid_email("maria"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("maria@"));
        assert!(!is_valid_email("maria@exa mple.com"));
        assert!(!is_valid_email("maria@@example.com"));
    }
}

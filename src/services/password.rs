use actix_web::web;

use crate::errors::ApiError;

/// Hashes a plaintext password at bcrypt's default cost. The work runs on
/// the blocking pool so the deliberately slow computation never stalls the
/// event loop; it is the one suspension point in request handling.
pub async fn hash(plain: String) -> Result<String, ApiError> {
    web::block(move || bcrypt::hash(plain, bcrypt::DEFAULT_COST))
        .await
        .map_err(|_| ApiError::Internal("Password hashing task failed".to_string()))?
        .map_err(|_| ApiError::Internal("Password hashing failed".to_string()))
}

/// Verifies a plaintext candidate against a stored hash.
pub async fn verify(plain: String, hashed: String) -> Result<bool, ApiError> {
    web::block(move || bcrypt::verify(plain, &hashed))
        .await
        .map_err(|_| ApiError::Internal("Password verification task failed".to_string()))
        .map(|result| result.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn hash_is_not_plaintext_and_verifies() {
        let hashed = hash("hunter2".to_string()).await.unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(hashed.starts_with("$2"));

        assert!(verify("hunter2".to_string(), hashed.clone()).await.unwrap());
        assert!(!verify("wrong".to_string(), hashed).await.unwrap());
    }

    #[actix_rt::test]
    async fn verify_rejects_garbage_hash() {
        assert!(!verify("anything".to_string(), "not-a-hash".to_string())
            .await
            .unwrap());
    }
}

use super::*;

#[tokio::test]
async fn hash_then_verify_round_trip() {
    let hash = hash_password("correct horse battery").await.unwrap();
    assert!(hash.starts_with("$2"));
    assert!(verify_password("correct horse battery", &hash).await.unwrap());
}

#[tokio::test]
async fn verify_rejects_wrong_password() {
    let hash = hash_password("correct horse battery").await.unwrap();
    assert!(!verify_password("incorrect horse", &hash).await.unwrap());
}

#[tokio::test]
async fn verify_errors_on_malformed_hash() {
    let result = verify_password("whatever", "not-a-bcrypt-hash").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn hashes_are_salted() {
    let a = hash_password("same password").await.unwrap();
    let b = hash_password("same password").await.unwrap();
    assert_ne!(a, b);
}

//! Object-storage plumbing for the document vault.
//!
//! Keys are scoped per user: `{user_id}/{timestamp}-{sanitized filename}`.
//! Downloads go through short-lived presigned URLs so the bucket never needs
//! to be public.

use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;

/// Presigned download URLs stay valid this long.
pub const DOWNLOAD_URL_TTL_SECS: u64 = 60;

/// Replaces anything outside `[A-Za-z0-9.-]` with underscores so uploaded
/// names can't smuggle path separators or control characters into keys.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

pub fn object_key(user_id: Uuid, timestamp_millis: i64, filename: &str) -> String {
    format!("{user_id}/{timestamp_millis}-{}", sanitize_filename(filename))
}

pub async fn upload_object(
    s3: &S3Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    data: Bytes,
) -> Result<(), AppError> {
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .body(ByteStream::from(data))
        .send()
        .await
        .map_err(|e| AppError::S3(format!("Upload failed: {e}")))?;

    info!("Uploaded document to s3://{bucket}/{key}");
    Ok(())
}

/// Best-effort removal, used to clean up after a failed metadata insert.
pub async fn delete_object(s3: &S3Client, bucket: &str, key: &str) {
    if let Err(e) = s3.delete_object().bucket(bucket).key(key).send().await {
        warn!("Failed to clean up s3://{bucket}/{key}: {e}");
    }
}

pub async fn presigned_download_url(
    s3: &S3Client,
    bucket: &str,
    key: &str,
) -> Result<String, AppError> {
    let presigning = PresigningConfig::expires_in(Duration::from_secs(DOWNLOAD_URL_TTL_SECS))
        .map_err(|e| AppError::S3(format!("Invalid presigning config: {e}")))?;

    let request = s3
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(presigning)
        .await
        .map_err(|e| AppError::S3(format!("Failed to presign URL: {e}")))?;

    Ok(request.uri().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_filename("NMC-cert.2024.pdf"), "NMC-cert.2024.pdf");
    }

    #[test]
    fn sanitize_replaces_hostile_characters() {
        assert_eq!(
            sanitize_filename("../etc/passwd scan.pdf"),
            ".._etc_passwd_scan.pdf"
        );
        assert_eq!(sanitize_filename("wound care (1).jpg"), "wound_care__1_.jpg");
    }

    #[test]
    fn object_key_is_user_scoped() {
        let user = Uuid::nil();
        let key = object_key(user, 1_700_000_000_000, "dbs check.pdf");
        assert_eq!(
            key,
            "00000000-0000-0000-0000-000000000000/1700000000000-dbs_check.pdf"
        );
    }
}

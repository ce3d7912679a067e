//! CV archive — keeps the uploaded file bytes in object storage (MinIO locally,
//! S3 in production). Archiving is optional; candidates are created either way.

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::candidates::generator::UploadedFile;
use crate::config::S3Settings;
use crate::errors::AppError;

#[async_trait]
pub trait CvArchive: Send + Sync {
    /// Stores the file and returns a URL it can be fetched from.
    async fn store(&self, file_name: &str, data: Bytes) -> Result<String, AppError>;
}

pub struct S3CvArchive {
    client: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
}

impl S3CvArchive {
    pub async fn connect(settings: &S3Settings) -> Self {
        let client = build_s3_client(settings).await;
        info!(bucket = %settings.bucket, "S3 client initialized");
        Self {
            client,
            bucket: settings.bucket.clone(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CvArchive for S3CvArchive {
    async fn store(&self, file_name: &str, data: Bytes) -> Result<String, AppError> {
        let key = object_key(Uuid::new_v4(), file_name);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type_for(file_name))
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("put_object {key}: {e}")))?;

        Ok(format!("{}/{}/{}", self.endpoint, self.bucket, key))
    }
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(settings: &S3Settings) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &settings.access_key_id,
        &settings.secret_access_key,
        None,
        None,
        "talent-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&settings.endpoint)
        .load()
        .await;

    // MinIO only serves path-style URLs.
    let config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(config)
}

/// Archives each file. A failed upload is logged and leaves `file_url` empty.
pub async fn archive_uploads(
    archive: Option<&dyn CvArchive>,
    files: Vec<(String, Bytes)>,
) -> Vec<UploadedFile> {
    let mut uploaded = Vec::with_capacity(files.len());
    for (file_name, data) in files {
        let file_url = match archive {
            Some(archive) => match archive.store(&file_name, data).await {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(file_name = %file_name, error = %e, "CV archive upload failed");
                    None
                }
            },
            None => None,
        };
        uploaded.push(UploadedFile {
            file_name,
            file_url,
        });
    }
    uploaded
}

fn object_key(id: Uuid, file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("cvs/{id}/{safe}")
}

fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingArchive;
    use super::*;

    fn files(names: &[&str]) -> Vec<(String, Bytes)> {
        names
            .iter()
            .map(|n| (n.to_string(), Bytes::from_static(b"%PDF-1.4")))
            .collect()
    }

    #[tokio::test]
    async fn test_no_archive_leaves_urls_empty() {
        let uploaded = archive_uploads(None, files(&["a.pdf", "b.pdf"])).await;
        assert_eq!(
            uploaded,
            [UploadedFile::unarchived("a.pdf"), UploadedFile::unarchived("b.pdf")]
        );
    }

    #[tokio::test]
    async fn test_failed_upload_is_skipped_not_fatal() {
        let archive = RecordingArchive::default();
        let uploaded = archive_uploads(Some(&archive), files(&["a.pdf", "fail.pdf", "c.pdf"])).await;

        assert_eq!(uploaded.len(), 3);
        assert_eq!(uploaded[0].file_url.as_deref(), Some("memory://cvs/a.pdf"));
        assert_eq!(uploaded[1].file_url, None);
        assert_eq!(uploaded[2].file_url.as_deref(), Some("memory://cvs/c.pdf"));
        assert_eq!(*archive.stored.lock().unwrap(), ["a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_object_key_flattens_paths() {
        let id = Uuid::nil();
        assert_eq!(
            object_key(id, "team/cv.pdf"),
            "cvs/00000000-0000-0000-0000-000000000000/team_cv.pdf"
        );
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for("CV.PDF"), "application/pdf");
        assert_eq!(content_type_for("cv.docx"), "application/vnd.openxmlformats-officedocument.wordprocessingml.document");
        assert_eq!(content_type_for("README"), "application/octet-stream");
    }
}

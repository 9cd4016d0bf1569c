// uploads.rs
//
// multipart/form-data parsing for the add-item form, and turning uploaded
// photos into `data:` URLs for previews.

use crate::errors::ServerError;
use base64::Engine;
use mime::Mime;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub field: String,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A parsed multipart body: text fields in order, then files in order.
#[derive(Debug, Default, PartialEq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<UploadedFile>,
}

impl MultipartForm {
    /// Files for `field`, skipping empty file inputs browsers send when
    /// nothing was picked.
    pub fn files_named(&self, field: &str) -> Vec<UploadedFile> {
        self.files
            .iter()
            .filter(|f| f.field == field && !(f.filename.is_empty() && f.bytes.is_empty()))
            .cloned()
            .collect()
    }
}

/// Boundary parameter of a `multipart/form-data` content type.
pub fn boundary(content_type: &str) -> Result<String, ServerError> {
    let mime: Mime = content_type
        .parse()
        .map_err(|_| ServerError::BadRequest("invalid content type".into()))?;

    if mime.type_() != mime::MULTIPART || mime.subtype() != mime::FORM_DATA {
        return Err(ServerError::BadRequest("expected multipart/form-data".into()));
    }

    mime.get_param(mime::BOUNDARY)
        .map(|b| b.as_str().to_string())
        .ok_or_else(|| ServerError::BadRequest("missing multipart boundary".into()))
}

pub fn parse_multipart(body: &[u8], boundary: &str) -> Result<MultipartForm, ServerError> {
    let delimiter = format!("--{boundary}");
    let delimiter = delimiter.as_bytes();
    let malformed = || ServerError::BadRequest("malformed multipart body".into());

    let mut form = MultipartForm::default();
    let mut rest = match find(body, delimiter) {
        Some(start) => &body[start + delimiter.len()..],
        None => return Err(malformed()),
    };

    loop {
        if rest.starts_with(b"--") {
            break;
        }
        rest = rest.strip_prefix(b"\r\n").ok_or_else(malformed)?;

        let header_end = find(rest, b"\r\n\r\n").ok_or_else(malformed)?;
        let headers = std::str::from_utf8(&rest[..header_end]).map_err(|_| malformed())?;
        let content = &rest[header_end + 4..];

        let next = find_delimiter(content, delimiter).ok_or_else(malformed)?;
        let data = &content[..next];
        rest = &content[next + 2 + delimiter.len()..];

        let part = PartHeaders::parse(headers).ok_or_else(malformed)?;
        match part.filename {
            Some(filename) => form.files.push(UploadedFile {
                field: part.name,
                filename,
                content_type: part
                    .content_type
                    .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string()),
                bytes: data.to_vec(),
            }),
            None => form
                .fields
                .push((part.name, String::from_utf8_lossy(data).into_owned())),
        }
    }

    Ok(form)
}

struct PartHeaders {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
}

impl PartHeaders {
    fn parse(raw: &str) -> Option<Self> {
        let mut name = None;
        let mut filename = None;
        let mut content_type = None;

        for line in raw.split("\r\n") {
            let (key, value) = line.split_once(':')?;
            let key = key.trim().to_ascii_lowercase();

            if key == "content-disposition" {
                for param in value.split(';').skip(1) {
                    let Some((k, v)) = param.trim().split_once('=') else {
                        continue;
                    };
                    let v = v.trim_matches('"').to_string();
                    match k {
                        "name" => name = Some(v),
                        "filename" => filename = Some(v),
                        _ => {}
                    }
                }
            } else if key == "content-type" {
                content_type = Some(value.trim().to_string());
            }
        }

        Some(Self {
            name: name?,
            filename,
            content_type,
        })
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Offset of the CRLF that precedes the next delimiter line.
fn find_delimiter(haystack: &[u8], delimiter: &[u8]) -> Option<usize> {
    let mut line = Vec::with_capacity(delimiter.len() + 2);
    line.extend_from_slice(b"\r\n");
    line.extend_from_slice(delimiter);
    find(haystack, &line)
}

/// A photo ready to show in an `<img src>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreview {
    /// Position of the file in the user's selection.
    pub index: usize,
    pub filename: String,
    pub data_url: String,
}

/// Encode every image concurrently, one thread per file.
///
/// Threads report back in whatever order they finish; each result carries
/// its selection index and the output is sorted on it, so previews always
/// appear in the order the files were picked. Empty files and non-images
/// are skipped.
pub fn read_previews(files: &[UploadedFile]) -> Vec<ImagePreview> {
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for (index, file) in files.iter().enumerate() {
            let tx = tx.clone();
            scope.spawn(move || {
                let _ = tx.send((index, encode_preview(index, file)));
            });
        }
    });
    drop(tx);

    let mut previews: Vec<ImagePreview> = rx
        .into_iter()
        .filter_map(|(index, preview)| {
            if preview.is_none() {
                warn!(index, filename = %files[index].filename, "Skipping unreadable upload");
            }
            preview
        })
        .collect();

    previews.sort_by_key(|p| p.index);
    debug!(count = previews.len(), "Encoded image previews");
    previews
}

fn encode_preview(index: usize, file: &UploadedFile) -> Option<ImagePreview> {
    let mime: Mime = file.content_type.parse().ok()?;
    if mime.type_() != mime::IMAGE || file.bytes.is_empty() {
        return None;
    }

    let encoded = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
    Some(ImagePreview {
        index,
        filename: file.filename.clone(),
        data_url: format!("data:{};base64,{encoded}", mime.essence_str()),
    })
}

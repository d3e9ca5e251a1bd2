//! Fixtures and a recording responder shared by unit tests.

use crate::error::{ClientError, Result};
use crate::responder::Responder;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub(crate) mod fixtures {
    macro_rules! fixture {
        ($name:literal) => {
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/", $name))
        };
    }

    pub const PHOTO_TWO_FACES: &str = fixture!("photo_two_faces.json");
    pub const RECOGNIZE: &str = fixture!("recognize.json");
    pub const TRAIN: &str = fixture!("train.json");
    pub const SAVE: &str = fixture!("save.json");
    pub const REMOVE: &str = fixture!("remove.json");
    pub const STATUS: &str = fixture!("status.json");
    pub const GROUP: &str = fixture!("group.json");
    pub const USERS: &str = fixture!("users.json");
    pub const LIMITS: &str = fixture!("limits.json");
    pub const FAILURE: &str = fixture!("failure.json");
}

/// One request seen by [`MockResponder`].
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub url: String,
    pub file: Option<PathBuf>,
    pub form: Vec<(String, String)>,
}

impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Returns a canned body and records every request.
pub(crate) struct MockResponder {
    body: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockResponder {
    pub fn returning(body: &str) -> Self {
        Self {
            body: body.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests_handle(&self) -> Arc<Mutex<Vec<Recorded>>> {
        self.requests.clone()
    }

    fn record(&self, url: &str, file: Option<&Path>, form: &[(String, String)]) {
        self.requests.lock().unwrap().push(Recorded {
            url: url.to_string(),
            file: file.map(Path::to_path_buf),
            form: form.to_vec(),
        });
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<String> {
        self.record(url, None, form);
        Ok(self.body.clone())
    }

    async fn post_file(
        &self,
        file: &Path,
        url: &str,
        form: &[(String, String)],
    ) -> Result<String> {
        if !file.exists() {
            return Err(ClientError::FileNotFound(file.to_path_buf()).into());
        }
        self.record(url, Some(file), form);
        Ok(self.body.clone())
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

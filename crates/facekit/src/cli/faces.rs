//! `facekit detect`, `facekit recognize` and `facekit group`.

use super::{local_image, Session};
use clap::Args;
use facekit_core::Photo;

/// Arguments for `detect`.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Photo URLs, or a single local image file
    #[arg(required = true)]
    pub inputs: Vec<String>,
}

/// Arguments for `recognize` and `group`.
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Photo URLs, or a single local image file
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// User ids to match against (e.g. `all@acme.example`)
    #[arg(short, long, required = true, value_delimiter = ',')]
    pub uids: Vec<String>,
}

pub async fn detect(args: DetectArgs, session: &Session) -> anyhow::Result<()> {
    let resp = match local_image(&args.inputs) {
        Some(path) => session.client.detect_file(&path).await?,
        None => session.client.detect(&args.inputs).await?,
    };
    log_faces("Detected", &resp.photos);
    session.print(&resp)
}

pub async fn recognize(args: MatchArgs, session: &Session) -> anyhow::Result<()> {
    let resp = match local_image(&args.inputs) {
        Some(path) => session.client.recognize_file(&path, &args.uids).await?,
        None => session.client.recognize(&args.inputs, &args.uids).await?,
    };
    log_faces("Recognized", &resp.photos);
    session.print(&resp)
}

pub async fn group(args: MatchArgs, session: &Session) -> anyhow::Result<()> {
    let groups = match local_image(&args.inputs) {
        Some(path) => session.client.group_file(&path, &args.uids).await?,
        None => session.client.group(&args.inputs, &args.uids).await?,
    };
    tracing::info!(
        "{} group(s), {} recognized",
        groups.groups.len(),
        groups.groups.iter().filter(|g| g.is_recognized()).count()
    );
    session.print(&groups)
}

fn log_faces(verb: &str, photos: &[Photo]) {
    let faces: usize = photos.iter().map(Photo::face_count).sum();
    tracing::info!("{verb} {faces} face(s) in {} photo(s)", photos.len());
}

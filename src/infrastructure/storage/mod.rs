mod flowchart_svg;
mod local_artifact_store;

pub use flowchart_svg::render_flowchart_svg;
pub use local_artifact_store::LocalArtifactStore;

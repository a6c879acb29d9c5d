// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playlist file and channel document serialization.
//!
//! Two independent formats live here:
//! - playlist files: one compact JSON video record per line
//! - channel documents: a single nested document, JSON or YAML
//!   depending on the file extension

use crate::error::{Error, Result};
use crate::models::{Channel, Playlist, Video};
use serde::de::{self, DeserializeOwned};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Channel document as read from disk. Both keys are optional.
#[derive(Debug)]
pub struct ChannelDocument {
    pub name: Option<String>,
    pub playlists: Vec<Playlist>,
}

/// Top level of the document before playlists are decoded.
#[derive(Deserialize)]
struct RawChannelDocument {
    name: Option<String>,
    #[serde(default)]
    playlists: Vec<Value>,
}

/// Document encoding, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// YAML for `.yaml`/`.yml`, JSON for everything else.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());
        match extension.as_deref() {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Fail unless `value` is an object. Derived struct decoders would also
/// accept a positional array; every record and document here is keyed.
pub fn ensure_object(value: &Value) -> serde_json::Result<()> {
    let found = match value {
        Value::Object(_) => return Ok(()),
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
    };
    Err(de::Error::custom(format!("expected an object, found {}", found)))
}

/// Decode `T` from a value that must be an object.
pub fn from_object<T: DeserializeOwned>(value: Value) -> serde_json::Result<T> {
    ensure_object(&value)?;
    serde_json::from_value(value)
}

/// Write videos to a playlist file, one record per line.
pub fn write_video_lines(videos: &[Video], path: &Path) -> Result<()> {
    let mut contents = String::new();
    for video in videos {
        let line = serde_json::to_string(video).map_err(|e| Error::format(path, None, e))?;
        contents.push_str(&line);
        contents.push('\n');
    }
    std::fs::write(path, contents).map_err(|e| Error::write(path, e))
}

/// Read every record of a playlist file, skipping blank lines.
pub fn read_video_lines(path: &Path) -> Result<Vec<Video>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Value>(line.trim())
                .and_then(from_object::<Video>)
                .map_err(|e| Error::format(path, Some(index + 1), e))
        })
        .collect()
}

/// Export a channel document to `path`.
pub fn export_channel(channel: &Channel, path: &Path) -> Result<()> {
    let playlists: Vec<Value> =
        channel.playlists.iter().map(Playlist::to_document).collect();
    let document = serde_json::json!({
        "name": channel.name,
        "playlists": playlists,
    });
    let text = match DocumentFormat::from_path(path) {
        DocumentFormat::Yaml => {
            serde_yaml::to_string(&document).map_err(|e| Error::format(path, None, e))?
        }
        DocumentFormat::Json => {
            serde_json::to_string_pretty(&document).map_err(|e| Error::format(path, None, e))?
        }
    };
    std::fs::write(path, text).map_err(|e| Error::write(path, e))
}

/// Import a channel document from `path`.
pub fn import_channel(path: &Path) -> Result<ChannelDocument> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    let value: Value = match DocumentFormat::from_path(path) {
        DocumentFormat::Yaml => {
            serde_yaml::from_str(&text).map_err(|e| Error::format(path, None, e))?
        }
        DocumentFormat::Json => {
            serde_json::from_str(&text).map_err(|e| Error::format(path, None, e))?
        }
    };
    let raw: RawChannelDocument = from_object(value).map_err(|e| Error::format(path, None, e))?;
    let playlists = raw
        .playlists
        .into_iter()
        .map(|document| Playlist::from_document(document).map_err(|e| Error::format(path, None, e)))
        .collect::<Result<Vec<_>>>()?;
    Ok(ChannelDocument {
        name: raw.name,
        playlists,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("channel")), DocumentFormat::Json);
    }

    #[test]
    fn test_video_lines_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        let videos = vec![Video::new("Intro", 125, 10), Video::new("Outro", 30, 2)];
        write_video_lines(&videos, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(text.ends_with('\n'));
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["title"], "Intro");
        assert_eq!(first["duration"], 125);
        assert_eq!(first["views"], 10);
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(
            &path,
            "\n  {\"title\":\"A\",\"duration\":1,\"views\":2}  \n\n   \n{\"views\":4,\"title\":\"B\",\"duration\":3}",
        )
        .unwrap();

        let videos = read_video_lines(&path).unwrap();
        assert_eq!(videos, vec![Video::new("A", 1, 2), Video::new("B", 3, 4)]);
    }

    #[test]
    fn test_read_reports_bad_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(
            &path,
            "{\"title\":\"A\",\"duration\":1,\"views\":2}\n\n{\"title\":\"B\",\"duration\":\"long\",\"views\":2}\n",
        )
        .unwrap();

        let err = read_video_lines(&path).unwrap_err();
        assert!(matches!(err, Error::Format { line: Some(3), .. }));
    }

    #[test]
    fn test_read_missing_record_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "{\"title\":\"A\",\"duration\":1}\n").unwrap();
        assert!(matches!(
            read_video_lines(&path),
            Err(Error::Format { line: Some(1), .. })
        ));
    }

    #[test]
    fn test_empty_playlist_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        write_video_lines(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        assert!(read_video_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn test_channel_document_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("channel.json");
        let mut channel = Channel::new("Test");
        channel.add_playlist(Playlist::new("Tutorials", 1));
        export_channel(&channel, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["name"], "Test");
        assert_eq!(value["playlists"][0]["playListName"], "Tutorials");
        assert_eq!(value["playlists"][0]["plID"], 1);
        assert!(value["playlists"][0]["videos"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_import_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{}").unwrap();
        let document = import_channel(&path).unwrap();
        assert!(document.name.is_none());
        assert!(document.playlists.is_empty());
    }

    #[test]
    fn test_export_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("channel.json");
        let err = export_channel(&Channel::default(), &path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));

        let err = write_video_lines(&[Video::new("Intro", 1, 1)], &path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_ensure_object() {
        assert!(ensure_object(&serde_json::json!({ "title": "x" })).is_ok());
        let err = ensure_object(&serde_json::json!(["x", 1, 2])).unwrap_err();
        assert!(err.to_string().contains("found an array"));
        assert!(ensure_object(&serde_json::json!("x")).is_err());
    }

    #[test]
    fn test_read_rejects_positional_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(
            &path,
            "{\"title\":\"A\",\"duration\":1,\"views\":2}\n[\"Intro\",125,10]\n",
        )
        .unwrap();

        let err = read_video_lines(&path).unwrap_err();
        assert!(matches!(err, Error::Format { line: Some(2), .. }));
    }

    #[test]
    fn test_import_rejects_non_object_documents() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("list.json");
        std::fs::write(&json, r#"["Wiped"]"#).unwrap();
        assert!(matches!(import_channel(&json), Err(Error::Format { line: None, .. })));

        let yaml = dir.path().join("list.yaml");
        std::fs::write(&yaml, "- Wiped\n").unwrap();
        assert!(matches!(import_channel(&yaml), Err(Error::Format { line: None, .. })));

        let scalar = dir.path().join("scalar.json");
        std::fs::write(&scalar, "42").unwrap();
        assert!(matches!(import_channel(&scalar), Err(Error::Format { .. })));
    }

    #[test]
    fn test_import_rejects_positional_playlist_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("channel.json");

        std::fs::write(&path, r#"{"name": "X", "playlists": [["A", 1, []]]}"#).unwrap();
        assert!(matches!(import_channel(&path), Err(Error::Format { .. })));

        std::fs::write(
            &path,
            r#"{"name": "X", "playlists": [{"playListName": "A", "plID": 1, "videos": [["Intro", 125, 10]]}]}"#,
        )
        .unwrap();
        assert!(matches!(import_channel(&path), Err(Error::Format { .. })));
    }
}

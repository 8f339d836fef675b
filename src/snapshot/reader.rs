use crate::errors::{AppError, AppResult};
use crate::types::{
    Channel, Forward, ListClosedChannelsResponse, ListForwardsResponse, ListPeerChannelsResponse,
};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Read a gzip-compressed JSON document
pub fn read_gzip_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let compressed = std::fs::read(path).map_err(|source| AppError::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(|source| AppError::Decompression {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_slice(&json).map_err(|source| AppError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_forwards(path: &Path) -> AppResult<Vec<Forward>> {
    let response: ListForwardsResponse = read_gzip_json(path)?;
    info!(
        "Loaded {} forwards from {}",
        response.forwards.len(),
        path.display()
    );
    Ok(response.forwards)
}

pub fn read_channels(path: &Path) -> AppResult<Vec<Channel>> {
    let response: ListPeerChannelsResponse = read_gzip_json(path)?;
    info!(
        "Loaded {} open channels from {}",
        response.channels.len(),
        path.display()
    );
    Ok(response.channels)
}

pub fn read_closed_channels(path: &Path) -> AppResult<Vec<Channel>> {
    let response: ListClosedChannelsResponse = read_gzip_json(path)?;
    info!(
        "Loaded {} closed channels from {}",
        response.closedchannels.len(),
        path.display()
    );
    Ok(response.closedchannels)
}

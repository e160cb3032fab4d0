//! Load stage: fetch the tileset and grid document, then hand out an
//! immutable session snapshot.
//!
//! Rendering never starts on partial data: [`Session::load`] resolves only
//! after both resources are fully fetched and validated, and the resulting
//! [`Session`] is read-only for the rest of the viewing session. There are no
//! module-level globals; everything a render needs travels in the session.

use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use citymap_core::{Cell, GridDocument, GridError, TileTable};
use citymap_protocol::{GetMapRequest, MapResponse, NodeEntry, TileSetDoc};

/// Why a session could not be loaded.
///
/// Any of these aborts the load entirely; the caller decides what to show.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to reach map endpoint {addr}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("map endpoint {addr} closed the connection before responding")]
    ClosedEarly { addr: String },
    #[error("malformed resource: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("malformed grid document: {0}")]
    Grid(#[from] GridError),
}

/// Where the two input resources come from.
///
/// The tileset is always a local static asset; the grid document is either a
/// local file (an exported API response) or a line-delimited JSON endpoint.
#[derive(Debug, Clone)]
pub enum MapSource {
    File { tileset: PathBuf, map: PathBuf },
    Remote {
        tileset: PathBuf,
        addr: String,
        map_id: u32,
    },
}

impl MapSource {
    pub fn file(tileset: impl Into<PathBuf>, map: impl Into<PathBuf>) -> Self {
        Self::File {
            tileset: tileset.into(),
            map: map.into(),
        }
    }

    pub fn remote(tileset: impl Into<PathBuf>, addr: impl Into<String>, map_id: u32) -> Self {
        Self::Remote {
            tileset: tileset.into(),
            addr: addr.into(),
            map_id,
        }
    }
}

/// Immutable snapshot of everything one viewing session renders from.
#[derive(Debug, Clone)]
pub struct Session {
    table: TileTable,
    document: GridDocument,
}

impl Session {
    /// Fetch both inputs and validate the grid. Completes only when both are
    /// fully loaded, so layer construction never observes partial data.
    pub async fn load(source: &MapSource) -> Result<Self, FetchError> {
        let (tileset, response) = match source {
            MapSource::File { tileset, map } => {
                let tileset = read_json::<TileSetDoc>(tileset).await?;
                let response = read_json::<MapResponse>(map).await?;
                (tileset, response)
            }
            MapSource::Remote {
                tileset,
                addr,
                map_id,
            } => {
                let tileset = read_json::<TileSetDoc>(tileset).await?;
                let response = fetch_remote(addr, *map_id).await?;
                (tileset, response)
            }
        };

        let table = TileTable::from(tileset);
        let document = GridDocument::new(response.web_grid)?;
        info!(
            "loaded map {:?}: {}x{} nodes",
            document.name(),
            document.width(),
            document.height()
        );
        Ok(Self { table, document })
    }

    pub fn table(&self) -> &TileTable {
        &self.table
    }

    pub fn document(&self) -> &GridDocument {
        &self.document
    }

    /// Node under an already grid-resolved cell, or `None` when the cell lies
    /// outside the document. Hover/click handlers suppress the action on
    /// `None` instead of erroring.
    pub fn hit_test(&self, cell: Cell) -> Option<&NodeEntry> {
        self.document.node_at(cell).ok()
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, FetchError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| FetchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// One request/response exchange with the map endpoint: a JSON request line,
/// then a single JSON response line.
async fn fetch_remote(addr: &str, map_id: u32) -> Result<MapResponse, FetchError> {
    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|source| FetchError::Connect {
            addr: addr.to_string(),
            source,
        })?;

    let mut line = serde_json::to_vec(&GetMapRequest::new(map_id))?;
    line.push(b'\n');
    stream
        .write_all(&line)
        .await
        .map_err(|source| FetchError::Connect {
            addr: addr.to_string(),
            source,
        })?;
    debug!("requested map {map_id} from {addr}");

    let mut reader = BufReader::new(stream);
    let mut response = String::new();
    let n = reader
        .read_line(&mut response)
        .await
        .map_err(|source| FetchError::Connect {
            addr: addr.to_string(),
            source,
        })?;
    if n == 0 {
        return Err(FetchError::ClosedEarly {
            addr: addr.to_string(),
        });
    }

    Ok(serde_json::from_str(&response)?)
}

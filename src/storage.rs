//! In-memory player table with an optional JSON snapshot on disk.
//!
//! The table is the single owner of all frame data: handlers read and write
//! players only through [`PlayerStore`], and `record_frames` performs the
//! merge-recompute-store sequence under one write-lock acquisition so
//! concurrent updates to the same player serialize cleanly.
//!
//! The snapshot is a plain JSON array of players. It is loaded once at
//! startup and written back on shutdown; the format is meant to be small
//! and human-inspectable, not fast.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Instant;

use crate::score_computation::compute_total_score;
use crate::types::{empty_frames, Frame, Player};

pub struct PlayerStore {
    next_id: AtomicU64,
    players: RwLock<HashMap<u64, Player>>,
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStore {
    pub fn new() -> Self {
        PlayerStore {
            next_id: AtomicU64::new(1),
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new player with ten zeroed frames and a zero score.
    pub fn register(&self, name: &str) -> Player {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let player = Player {
            id,
            name: name.to_string(),
            frames: empty_frames(),
            score: 0,
        };
        self.players.write().unwrap().insert(id, player.clone());
        player
    }

    /// Look up a player. Returns the record as stored; no recomputation.
    pub fn get(&self, id: u64) -> Option<Player> {
        self.players.read().unwrap().get(&id).cloned()
    }

    /// Merge submitted frames over the player's stored frames, recompute
    /// the total score, and store the result. Returns the updated record,
    /// or `None` if the player is unknown.
    pub fn record_frames(&self, id: u64, frames: &BTreeMap<u8, Frame>) -> Option<Player> {
        let mut players = self.players.write().unwrap();
        let player = players.get_mut(&id)?;
        for (&number, &frame) in frames {
            player.frames.insert(number, frame);
        }
        player.score = compute_total_score(&player.frames);
        Some(player.clone())
    }

    /// Insert a player as-is, bumping the id counter past it. Used when
    /// restoring a snapshot.
    pub fn insert(&self, player: Player) {
        self.next_id.fetch_max(player.id + 1, Ordering::Relaxed);
        self.players.write().unwrap().insert(player.id, player);
    }

    /// All players ordered by id.
    pub fn all(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.read().unwrap().values().cloned().collect();
        players.sort_by_key(|p| p.id);
        players
    }

    pub fn len(&self) -> usize {
        self.players.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check if a file exists on disk.
pub fn file_exists(filename: &str) -> bool {
    Path::new(filename).exists()
}

/// Load a player snapshot into the store. Returns true on success.
pub fn load_players(store: &PlayerStore, filename: &str) -> bool {
    let start_time = Instant::now();
    println!("Loading players from {}...", filename);

    let content = match fs::read_to_string(filename) {
        Ok(c) => c,
        Err(_) => {
            println!("File not found: {}", filename);
            return false;
        }
    };

    let players: Vec<Player> = match serde_json::from_str(&content) {
        Ok(p) => p,
        Err(e) => {
            println!("Invalid player snapshot: {}", e);
            return false;
        }
    };

    let count = players.len();
    for player in players {
        store.insert(player);
    }

    let elapsed = start_time.elapsed().as_secs_f64() * 1000.0;
    println!("Loaded {} players in {:.2} ms", count, elapsed);
    true
}

/// Save all players as a JSON snapshot.
pub fn save_players(store: &PlayerStore, filename: &str) {
    let start_time = Instant::now();
    println!("Saving players to {}...", filename);

    // Ensure parent directory exists
    if let Some(parent) = Path::new(filename).parent() {
        let _ = fs::create_dir_all(parent);
    }

    let players = store.all();
    let json = match serde_json::to_vec_pretty(&players) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing players: {}", e);
            return;
        }
    };

    let mut f = match File::create(filename) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error creating file: {}", e);
            return;
        }
    };

    if let Err(e) = f.write_all(&json) {
        eprintln!("Error writing file: {}", e);
        return;
    }

    let elapsed = start_time.elapsed().as_secs_f64() * 1000.0;
    println!("Saved {} players in {:.2} ms", players.len(), elapsed);
}

//! In-memory metadata store for users and file records.
//!
//! Both tables sit behind one mutex so that creating a file and bumping its
//! owner's counters happen as a single step, even with several workers.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use log::{debug, warn};

use crate::errors::AppError;
use crate::models::file::{CreateFileRequest, FileRecord};
use crate::models::user::{FileTypeUsage, User, UserStats};

#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    files: Vec<FileRecord>,
    last_file_id: i64,
}

#[derive(Default)]
pub struct MetadataStore {
    tables: Mutex<Tables>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::InternalServerError("Metadata store unavailable".to_string()))
    }

    /// Returns the existing user untouched, or registers a new one.
    pub fn upsert_user(&self, wallet_address: &str) -> Result<User, AppError> {
        let mut tables = self.lock()?;
        let user = tables
            .users
            .entry(wallet_address.to_string())
            .or_insert_with(|| {
                debug!("Registering user {}", wallet_address);
                User::new(wallet_address, Utc::now())
            });
        Ok(user.clone())
    }

    pub fn get_user(&self, wallet_address: &str) -> Result<User, AppError> {
        self.lock()?
            .users
            .get(wallet_address)
            .cloned()
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub fn create_file(&self, request: CreateFileRequest) -> Result<FileRecord, AppError> {
        let mut tables = self.lock()?;
        let now = Utc::now();

        // Millisecond clock ids, bumped past the last one so they never repeat.
        let id = now.timestamp_millis().max(tables.last_file_id + 1);
        tables.last_file_id = id;

        let file = FileRecord {
            id: id.to_string(),
            name: request.name,
            size: request.size,
            file_type: request.file_type,
            tx_id: request.tx_id,
            uploaded_at: now,
            owner: request.owner,
            is_public: request.is_public.unwrap_or(false),
            tags: request.tags.unwrap_or_default(),
        };

        match tables.users.get_mut(&file.owner) {
            Some(user) => {
                user.total_files += 1;
                user.total_storage = user.total_storage.saturating_add(file.size);
                user.last_activity = now;
            }
            None => warn!("File {} registered for unknown owner {}", file.id, file.owner),
        }

        tables.files.push(file.clone());
        Ok(file)
    }

    pub fn list_files_by_owner(&self, wallet_address: &str) -> Result<Vec<FileRecord>, AppError> {
        Ok(self
            .lock()?
            .files
            .iter()
            .filter(|file| file.owner == wallet_address)
            .cloned()
            .collect())
    }

    pub fn get_file_by_id(&self, file_id: &str) -> Result<FileRecord, AppError> {
        self.lock()?
            .files
            .iter()
            .find(|file| file.id == file_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))
    }

    /// Removes the first file with this id. Owner counters are left as they are.
    pub fn delete_file_by_id(&self, file_id: &str) -> Result<bool, AppError> {
        let mut tables = self.lock()?;
        match tables.files.iter().position(|file| file.id == file_id) {
            Some(index) => {
                tables.files.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn compute_user_stats(&self, wallet_address: &str) -> Result<UserStats, AppError> {
        let tables = self.lock()?;
        let user = tables
            .users
            .get(wallet_address)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut buckets: Vec<FileTypeUsage> = Vec::new();
        for file in tables.files.iter().filter(|file| file.owner == wallet_address) {
            match buckets.iter_mut().find(|b| b.file_type == file.file_type) {
                Some(bucket) => {
                    bucket.count += 1;
                    bucket.total_size = bucket.total_size.saturating_add(file.size);
                }
                None => buckets.push(FileTypeUsage {
                    file_type: file.file_type.clone(),
                    count: 1,
                    total_size: file.size,
                }),
            }
        }

        Ok(UserStats {
            total_files: user.total_files,
            total_storage: user.total_storage,
            files_uploaded_today: 0,
            storage_used_today: 0,
            most_used_file_types: buckets,
        })
    }

    pub fn file_count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.files.len())
    }
}

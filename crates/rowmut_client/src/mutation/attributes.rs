//! Well-known side-channel attributes.
//!
//! These ride along in the attribute map and are interpreted by the server:
//! operation id, replication cluster ids, visibility expression, access
//! control list and time to live.

use super::{Kind, Mutation};
use crate::error::{MutationError, MutationResult};
use crate::types::Permission;
use bytes::{BufMut, Bytes, BytesMut};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Attribute holding a client-chosen operation id.
pub const ID_ATTRIBUTE: &str = "_operation.attributes.id";

/// Attribute holding the ids of clusters that already applied the mutation.
pub const CLUSTER_IDS_ATTRIBUTE: &str = "_cs.id";

/// Attribute holding the visibility expression for the written cells.
pub const VISIBILITY_ATTRIBUTE: &str = "VISIBILITY";

/// Attribute holding per-user permissions for the written cells.
pub const ACL_ATTRIBUTE: &str = "acl";

/// Attribute holding the time to live of the written cells.
pub const TTL_ATTRIBUTE: &str = "_ttl";

impl<K: Kind> Mutation<K> {
    /// Sets an id used to identify this operation in logs and slow-query
    /// reports.
    pub fn set_id(&mut self, id: &str) -> &mut Self {
        self.set_attribute(ID_ATTRIBUTE, Bytes::copy_from_slice(id.as_bytes()))
    }

    /// Returns the operation id, if set.
    pub fn id(&self) -> MutationResult<Option<&str>> {
        self.text_attribute(ID_ATTRIBUTE)
    }

    /// Records the clusters this mutation has already been applied to.
    pub fn set_cluster_ids(&mut self, cluster_ids: &[Uuid]) -> &mut Self {
        let mut buf = BytesMut::with_capacity(cluster_ids.len() * 16);
        for id in cluster_ids {
            buf.put_slice(id.as_bytes());
        }
        self.set_attribute(CLUSTER_IDS_ATTRIBUTE, buf.freeze())
    }

    /// Returns the clusters this mutation has already been applied to.
    pub fn cluster_ids(&self) -> MutationResult<Vec<Uuid>> {
        let Some(raw) = self.attribute(CLUSTER_IDS_ATTRIBUTE) else {
            return Ok(Vec::new());
        };
        if raw.len() % 16 != 0 {
            return Err(MutationError::invalid_attribute(
                CLUSTER_IDS_ATTRIBUTE,
                format!("length {} is not a multiple of 16", raw.len()),
            ));
        }
        raw.chunks_exact(16)
            .map(|chunk| {
                Uuid::from_slice(chunk).map_err(|e| {
                    MutationError::invalid_attribute(CLUSTER_IDS_ATTRIBUTE, e.to_string())
                })
            })
            .collect()
    }

    /// Sets the visibility expression for the written cells.
    pub fn set_cell_visibility(&mut self, expression: &str) -> &mut Self {
        self.set_attribute(
            VISIBILITY_ATTRIBUTE,
            Bytes::copy_from_slice(expression.as_bytes()),
        )
    }

    /// Returns the visibility expression, if set.
    pub fn cell_visibility(&self) -> MutationResult<Option<&str>> {
        self.text_attribute(VISIBILITY_ATTRIBUTE)
    }

    /// Grants `permission` on the written cells to a single user.
    pub fn set_acl(&mut self, user: &str, permission: Permission) -> MutationResult<&mut Self> {
        let mut acl = BTreeMap::new();
        acl.insert(user.to_string(), permission);
        self.set_acl_map(&acl)
    }

    /// Grants per-user permissions on the written cells.
    pub fn set_acl_map(
        &mut self,
        acl: &BTreeMap<String, Permission>,
    ) -> MutationResult<&mut Self> {
        let encoded = serde_json::to_vec(acl)?;
        Ok(self.set_attribute(ACL_ATTRIBUTE, encoded))
    }

    /// Returns the per-user permissions; empty when none were set.
    pub fn acl(&self) -> MutationResult<BTreeMap<String, Permission>> {
        match self.attribute(ACL_ATTRIBUTE) {
            Some(raw) => serde_json::from_slice(raw)
                .map_err(|e| MutationError::invalid_attribute(ACL_ATTRIBUTE, e.to_string())),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Sets the time to live of the written cells, in milliseconds.
    pub fn set_ttl(&mut self, ttl: i64) -> MutationResult<&mut Self> {
        if ttl < 0 {
            return Err(MutationError::NegativeTtl { ttl });
        }
        Ok(self.set_attribute(TTL_ATTRIBUTE, ttl.to_be_bytes().to_vec()))
    }

    /// Returns the time to live in milliseconds, if set.
    pub fn ttl(&self) -> MutationResult<Option<i64>> {
        let Some(raw) = self.attribute(TTL_ATTRIBUTE) else {
            return Ok(None);
        };
        let bytes: [u8; 8] = raw[..].try_into().map_err(|_| {
            MutationError::invalid_attribute(
                TTL_ATTRIBUTE,
                format!("expected 8 bytes, got {}", raw.len()),
            )
        })?;
        Ok(Some(i64::from_be_bytes(bytes)))
    }

    fn text_attribute(&self, name: &str) -> MutationResult<Option<&str>> {
        self.attribute(name)
            .map(|raw| {
                std::str::from_utf8(raw)
                    .map_err(|e| MutationError::invalid_attribute(name, e.to_string()))
            })
            .transpose()
    }
}

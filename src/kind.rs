use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::wire::DataStoreType;

/// The datasource a backup policy protects. Each kind pins the data store the
/// backup rule writes to, the backup type and the data stores its retention
/// life cycles may reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    #[serde(alias = "disk")]
    Disk,
    #[serde(alias = "postgresql")]
    PostgreSql,
    #[serde(alias = "postgresql_flexible_server")]
    PostgreSqlFlexibleServer,
    #[serde(alias = "mysql_flexible_server")]
    MySqlFlexibleServer,
    #[serde(alias = "kubernetes_cluster")]
    KubernetesCluster,
    #[serde(alias = "blob_storage")]
    BlobStorage,
}

const ALL_KINDS: [PolicyKind; 6] = [
    PolicyKind::Disk,
    PolicyKind::PostgreSql,
    PolicyKind::PostgreSqlFlexibleServer,
    PolicyKind::MySqlFlexibleServer,
    PolicyKind::KubernetesCluster,
    PolicyKind::BlobStorage,
];

impl PolicyKind {
    pub fn datasource_type(&self) -> &'static str {
        match self {
            PolicyKind::Disk => "Microsoft.Compute/disks",
            PolicyKind::PostgreSql => "Microsoft.DBforPostgreSQL/servers/databases",
            PolicyKind::PostgreSqlFlexibleServer => "Microsoft.DBforPostgreSQL/flexibleServers",
            PolicyKind::MySqlFlexibleServer => "Microsoft.DBforMySQL/flexibleServers",
            PolicyKind::KubernetesCluster => "Microsoft.ContainerService/managedClusters",
            PolicyKind::BlobStorage => "Microsoft.Storage/storageAccounts/blobServices",
        }
    }

    pub fn backup_data_store(&self) -> DataStoreType {
        match self {
            PolicyKind::Disk | PolicyKind::KubernetesCluster => DataStoreType::OperationalStore,
            PolicyKind::PostgreSql
            | PolicyKind::PostgreSqlFlexibleServer
            | PolicyKind::MySqlFlexibleServer
            | PolicyKind::BlobStorage => DataStoreType::VaultStore,
        }
    }

    pub fn backup_type(&self) -> &'static str {
        match self {
            PolicyKind::Disk | PolicyKind::KubernetesCluster => "Incremental",
            PolicyKind::PostgreSql
            | PolicyKind::PostgreSqlFlexibleServer
            | PolicyKind::MySqlFlexibleServer => "Full",
            PolicyKind::BlobStorage => "Discrete",
        }
    }

    pub fn life_cycle_data_stores(&self) -> Vec<DataStoreType> {
        match self {
            PolicyKind::Disk | PolicyKind::KubernetesCluster => vec![DataStoreType::OperationalStore],
            PolicyKind::PostgreSql => vec![DataStoreType::VaultStore, DataStoreType::ArchiveStore],
            PolicyKind::PostgreSqlFlexibleServer
            | PolicyKind::MySqlFlexibleServer
            | PolicyKind::BlobStorage => vec![DataStoreType::VaultStore],
        }
    }

    pub fn from_datasource_type(datasource_type: &str) -> Result<Self, PolicyError> {
        ALL_KINDS
            .into_iter()
            .find(|k| k.datasource_type().eq_ignore_ascii_case(datasource_type))
            .ok_or_else(|| PolicyError::UnknownDatasourceType(datasource_type.to_string()))
    }
}

impl Display for PolicyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PolicyKind::Disk => "disk",
            PolicyKind::PostgreSql => "postgresql",
            PolicyKind::PostgreSqlFlexibleServer => "postgresql flexible server",
            PolicyKind::MySqlFlexibleServer => "mysql flexible server",
            PolicyKind::KubernetesCluster => "kubernetes cluster",
            PolicyKind::BlobStorage => "blob storage",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::{PolicyKind, ALL_KINDS};
    use crate::wire::DataStoreType;

    #[test]
    fn datasource_types_resolve_back() {
        for kind in ALL_KINDS {
            let resolved = PolicyKind::from_datasource_type(kind.datasource_type()).unwrap();
            assert_eq!(resolved, kind);
        }

        let resolved =
            PolicyKind::from_datasource_type("microsoft.containerservice/MANAGEDCLUSTERS").unwrap();
        assert_eq!(resolved, PolicyKind::KubernetesCluster);

        assert!(PolicyKind::from_datasource_type("Microsoft.Sql/servers").is_err());
    }

    #[test]
    fn backup_settings() {
        let cases = Vec::from([
            (PolicyKind::Disk, DataStoreType::OperationalStore, "Incremental"),
            (PolicyKind::KubernetesCluster, DataStoreType::OperationalStore, "Incremental"),
            (PolicyKind::PostgreSql, DataStoreType::VaultStore, "Full"),
            (PolicyKind::PostgreSqlFlexibleServer, DataStoreType::VaultStore, "Full"),
            (PolicyKind::MySqlFlexibleServer, DataStoreType::VaultStore, "Full"),
            (PolicyKind::BlobStorage, DataStoreType::VaultStore, "Discrete"),
        ]);

        for (kind, store, backup_type) in cases {
            assert_eq!(kind.backup_data_store(), store);
            assert_eq!(kind.backup_type(), backup_type);
        }
    }

    #[test]
    fn kind_from_yaml_aliases() {
        let kind: PolicyKind = serde_yaml::from_str("kubernetes_cluster").unwrap();
        assert_eq!(kind, PolicyKind::KubernetesCluster);
        let kind: PolicyKind = serde_yaml::from_str("MySqlFlexibleServer").unwrap();
        assert_eq!(kind, PolicyKind::MySqlFlexibleServer);
    }
}

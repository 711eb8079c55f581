/*
 * SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::TopologyError;
use crate::roles::{Role, RoleAssignment};

//
// Type definitions
//

/// Knobs for the generated document that don't come from the snapshot.
#[derive(Clone, Debug)]
pub struct TopologyOptions {
    pub ssh_user: String,
    pub ssh_port: u16,
    pub deploy_dir: String,
    pub data_dir: String,
}

impl Default for TopologyOptions {
    fn default() -> Self {
        Self {
            ssh_user: "ubuntu".to_string(),
            ssh_port: 22,
            deploy_dir: "/home/ubuntu/deploy".to_string(),
            data_dir: "/home/ubuntu/data".to_string(),
        }
    }
}

/// The generated cluster configuration, emitted as YAML for human review
/// before it is handed to deployment tooling.
///
/// The management instance hosts the observability services. Each zone
/// primary runs the query and placement services. Secondaries run
/// storage, labelled with their zone so the placement service spreads
/// replicas across zones.
#[derive(Debug, Serialize)]
pub struct ClusterTopology {
    pub global: GlobalConfig,
    pub server_configs: ServerConfigs,
    pub placement_servers: Vec<HostEntry>,
    pub sql_servers: Vec<HostEntry>,
    pub storage_servers: Vec<HostEntry>,
    pub monitoring_servers: Vec<HostEntry>,
    pub grafana_servers: Vec<HostEntry>,
    pub alertmanager_servers: Vec<HostEntry>,
}

#[derive(Debug, Serialize)]
pub struct GlobalConfig {
    pub user: String,
    pub ssh_port: u16,
    pub deploy_dir: String,
    pub data_dir: String,
}

#[derive(Debug, Serialize)]
pub struct ServerConfigs {
    pub placement: PlacementConfig,
}

#[derive(Debug, Serialize)]
pub struct PlacementConfig {
    #[serde(rename = "replication.location-labels")]
    pub replication_location_labels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HostEntry {
    pub host: Ipv4Addr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HostConfig>,
}

#[derive(Debug, Serialize)]
pub struct HostConfig {
    #[serde(rename = "server.labels")]
    pub server_labels: ZoneLabel,
}

#[derive(Debug, Serialize)]
pub struct ZoneLabel {
    pub zone: String,
}

impl HostEntry {
    fn plain(host: Ipv4Addr) -> Self {
        Self { host, config: None }
    }

    fn zone_labelled(host: Ipv4Addr, zone: &str) -> Self {
        Self {
            host,
            config: Some(HostConfig {
                server_labels: ZoneLabel {
                    zone: zone.to_string(),
                },
            }),
        }
    }
}

impl ClusterTopology {
    /// Build the document from a role assignment. Fails rather than
    /// emitting a partial document when the assignment is empty.
    pub fn from_assignment(
        assignment: &RoleAssignment,
        options: &TopologyOptions,
    ) -> Result<Self, TopologyError> {
        if assignment.management().is_none() {
            return Err(TopologyError::NoManagementNode);
        }

        let mut topology = Self {
            global: GlobalConfig {
                user: options.ssh_user.clone(),
                ssh_port: options.ssh_port,
                deploy_dir: options.deploy_dir.clone(),
                data_dir: options.data_dir.clone(),
            },
            server_configs: ServerConfigs {
                placement: PlacementConfig {
                    replication_location_labels: vec!["zone".to_string()],
                },
            },
            placement_servers: Vec::new(),
            sql_servers: Vec::new(),
            storage_servers: Vec::new(),
            monitoring_servers: Vec::new(),
            grafana_servers: Vec::new(),
            alertmanager_servers: Vec::new(),
        };

        for record in assignment.records() {
            let host = record.instance.private_ip;
            match &record.role {
                Role::Management => {
                    topology.monitoring_servers.push(HostEntry::plain(host));
                    topology.grafana_servers.push(HostEntry::plain(host));
                    topology.alertmanager_servers.push(HostEntry::plain(host));
                }
                Role::ZonePrimary => {
                    topology.sql_servers.push(HostEntry::plain(host));
                    topology.placement_servers.push(HostEntry::plain(host));
                }
                Role::Secondary { zone } => {
                    topology
                        .storage_servers
                        .push(HostEntry::zone_labelled(host, zone));
                }
            }
        }

        Ok(topology)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use crate::roles::assign_roles;

    fn instance(id: &str, private_ip: &str, zone: &str) -> Instance {
        Instance {
            instance_id: id.to_string(),
            private_ip: private_ip.parse().expect("Couldn't parse fixture address"),
            public_ip: None,
            zone: zone.to_string(),
        }
    }

    fn example_topology() -> ClusterTopology {
        let instances = vec![
            instance("i-a1", "10.0.0.4", "us-west-2a"),
            instance("i-a2", "10.0.0.9", "us-west-2a"),
            instance("i-b1", "10.0.1.4", "us-west-2b"),
            instance("i-b2", "10.0.1.9", "us-west-2b"),
        ];
        let assignment = assign_roles(&instances);
        ClusterTopology::from_assignment(&assignment, &TopologyOptions::default())
            .expect("Couldn't build topology")
    }

    #[test]
    fn test_sections_follow_roles() {
        let topology = example_topology();

        // Management hosts every observability section.
        for section in [
            &topology.monitoring_servers,
            &topology.grafana_servers,
            &topology.alertmanager_servers,
        ] {
            assert_eq!(section.len(), 1);
            assert_eq!(section[0].host.to_string(), "10.0.0.4");
        }

        // One zone primary: zone b's first instance (zone a's went to
        // management).
        assert_eq!(topology.sql_servers.len(), 1);
        assert_eq!(topology.sql_servers[0].host.to_string(), "10.0.1.4");
        assert_eq!(topology.placement_servers.len(), 1);

        // Secondaries carry their zone label.
        assert_eq!(topology.storage_servers.len(), 2);
        let zones: Vec<&str> = topology
            .storage_servers
            .iter()
            .map(|entry| {
                entry
                    .config
                    .as_ref()
                    .expect("storage entry missing zone label")
                    .server_labels
                    .zone
                    .as_str()
            })
            .collect();
        assert_eq!(zones, vec!["us-west-2a", "us-west-2b"]);
    }

    #[test]
    fn test_yaml_shape() {
        let rendered = example_topology().to_yaml().expect("Couldn't render YAML");
        let value: serde_yaml::Value =
            serde_yaml::from_str(&rendered).expect("Generated YAML must parse");

        assert_eq!(value["global"]["user"].as_str(), Some("ubuntu"));
        assert_eq!(value["global"]["ssh_port"].as_u64(), Some(22));
        assert_eq!(
            value["server_configs"]["placement"]["replication.location-labels"][0].as_str(),
            Some("zone")
        );
        assert_eq!(
            value["storage_servers"][0]["config"]["server.labels"]["zone"].as_str(),
            Some("us-west-2a")
        );
        // Plain entries serialize without a config key at all.
        assert!(value["sql_servers"][0].get("config").is_none());
    }

    #[test]
    fn test_empty_assignment_is_an_error() {
        let assignment = assign_roles(&[]);
        let result = ClusterTopology::from_assignment(&assignment, &TopologyOptions::default());
        assert!(matches!(result, Err(TopologyError::NoManagementNode)));
    }
}

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

use muster_secrets::{KeyMaterial, generate_password};
use muster_topology::Instance;
use serde::{Deserialize, Serialize};

use crate::ClassroomError;

//
// Type definitions
//

/// The connection coordinates of one instance assigned to a seat, the
/// subset of the snapshot a student needs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatInstance {
    pub id: String,
    pub private: Ipv4Addr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<Ipv4Addr>,
}

impl From<&Instance> for SeatInstance {
    fn from(instance: &Instance) -> Self {
        Self {
            id: instance.instance_id.clone(),
            private: instance.private_ip,
            public: instance.public_ip,
        }
    }
}

/// One student's resources: a key-pair name, the key material (when the
/// provider listing included it), a generated one-time password, and the
/// seat's instances.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Seat {
    pub key_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyMaterial>,
    pub password: String,
    pub instances: Vec<SeatInstance>,
}

/// The document handed to the instructor, emitted as JSON on stdout so
/// it can be redirected to a file and mailed out seat by seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    pub course_id: String,
    pub seats: Vec<Seat>,
}

/// Partition a snapshot into seats of `instances_per_seat` consecutive
/// instances and generate a one-time password per seat.
///
/// The split must be exact: leftover instances (or too few of them) are
/// an error, never silently dropped. `keys` is either empty or carries
/// exactly one key per seat, in seat order.
pub fn assign_seats(
    course_id: &str,
    instances: &[Instance],
    num_seats: usize,
    instances_per_seat: usize,
    keys: Vec<KeyMaterial>,
) -> Result<Roster, ClassroomError> {
    if instances_per_seat == 0 {
        return Err(ClassroomError::EmptySeat);
    }
    let expected = num_seats * instances_per_seat;
    if instances.len() != expected {
        return Err(ClassroomError::SeatCountMismatch {
            expected,
            actual: instances.len(),
        });
    }
    if !keys.is_empty() && keys.len() != num_seats {
        return Err(ClassroomError::KeyCountMismatch {
            seats: num_seats,
            keys: keys.len(),
        });
    }

    let mut keys = keys.into_iter();
    let seats = instances
        .chunks(instances_per_seat)
        .enumerate()
        .map(|(index, chunk)| Seat {
            key_name: format!("{course_id}-{index}"),
            key: keys.next(),
            password: generate_password(),
            instances: chunk.iter().map(SeatInstance::from).collect(),
        })
        .collect();

    tracing::info!(course_id, num_seats, instances_per_seat, "assigned seats");
    Ok(Roster {
        course_id: course_id.to_string(),
        seats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instances(count: usize) -> Vec<Instance> {
        (0..count)
            .map(|i| Instance {
                instance_id: format!("i-{i}"),
                private_ip: Ipv4Addr::new(10, 0, 8, i as u8 + 1),
                public_ip: None,
                zone: "us-west-2a".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_seats_chunk_in_snapshot_order() {
        let roster = assign_seats("db-101", &instances(4), 2, 2, Vec::new())
            .expect("Couldn't assign seats");

        assert_eq!(roster.course_id, "db-101");
        assert_eq!(roster.seats.len(), 2);
        assert_eq!(roster.seats[0].key_name, "db-101-0");
        assert_eq!(roster.seats[1].key_name, "db-101-1");
        let first: Vec<&str> = roster.seats[0]
            .instances
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(first, vec!["i-0", "i-1"]);
    }

    #[test]
    fn test_each_seat_gets_its_own_password() {
        let roster = assign_seats("db-101", &instances(2), 2, 1, Vec::new())
            .expect("Couldn't assign seats");
        assert_ne!(roster.seats[0].password, roster.seats[1].password);
    }

    #[test]
    fn test_instance_count_must_match() {
        let err = assign_seats("db-101", &instances(5), 2, 2, Vec::new())
            .expect_err("5 instances can't fill 2 seats of 2");
        assert!(matches!(
            err,
            ClassroomError::SeatCountMismatch {
                expected: 4,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_key_count_must_match_when_given() {
        let keys = vec![KeyMaterial::new("key".to_string())];
        let err = assign_seats("db-101", &instances(2), 2, 1, keys)
            .expect_err("1 key for 2 seats must fail");
        assert!(matches!(
            err,
            ClassroomError::KeyCountMismatch { seats: 2, keys: 1 }
        ));
    }

    #[test]
    fn test_zero_instances_per_seat_is_rejected() {
        assert!(matches!(
            assign_seats("db-101", &[], 0, 0, Vec::new()),
            Err(ClassroomError::EmptySeat)
        ));
    }

    #[test]
    fn test_roster_round_trips_through_json() {
        let keys = vec![
            KeyMaterial::new("key-a".to_string()),
            KeyMaterial::new("key-b".to_string()),
        ];
        let roster =
            assign_seats("db-101", &instances(2), 2, 1, keys).expect("Couldn't assign seats");
        let encoded = serde_json::to_string(&roster).expect("Couldn't encode roster");
        let decoded: Roster = serde_json::from_str(&encoded).expect("Couldn't decode roster");
        assert_eq!(decoded.seats[0].key.as_ref().unwrap().expose(), "key-a");
        assert_eq!(decoded.seats[0].password, roster.seats[0].password);
    }
}

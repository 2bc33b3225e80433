use serde::{Deserialize, Serialize};

use crate::core::particle::{Particle, ParticleKind};

/// One particle as it appears on the wire: stable id, single-character
/// category tag ("n" for nucleus, "e" for electron), and the current
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleState {
    pub id: i32,
    pub t: char,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<&Particle> for ParticleState {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            t: match p.kind {
                ParticleKind::Nucleus => 'n',
                ParticleKind::Electron => 'e',
            },
            x: p.position.x,
            y: p.position.y,
            z: p.position.z,
        }
    }
}

/// Encodes the particle view as one broadcast frame: a JSON array of
/// [`ParticleState`] records in storage order.
pub fn encode(particles: &[Particle]) -> serde_json::Result<String> {
    let states: Vec<ParticleState> = particles.iter().map(ParticleState::from).collect();
    serde_json::to_string(&states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn payload_matches_the_wire_format() {
        let particles = vec![
            Particle::nucleus(DVec3::new(0.5, 0.0, -0.25), 1.0, 1.0, 1),
            Particle::electron(DVec3::new(5.0, 0.0, 0.0), 0.02, -1.0, 5),
        ];
        let payload = encode(&particles).unwrap();
        assert_eq!(
            payload,
            r#"[{"id":1,"t":"n","x":0.5,"y":0.0,"z":-0.25},{"id":5,"t":"e","x":5.0,"y":0.0,"z":0.0}]"#
        );
    }

    #[test]
    fn empty_world_encodes_as_empty_array() {
        assert_eq!(encode(&[]).unwrap(), "[]");
    }

    #[test]
    fn records_keep_storage_order() {
        let particles = vec![
            Particle::electron(DVec3::ZERO, 0.02, -1.0, 9),
            Particle::nucleus(DVec3::ZERO, 1.0, 1.0, 1),
        ];
        let states: Vec<ParticleState> =
            serde_json::from_str(&encode(&particles).unwrap()).unwrap();
        assert_eq!(states[0].id, 9);
        assert_eq!(states[0].t, 'e');
        assert_eq!(states[1].id, 1);
        assert_eq!(states[1].t, 'n');
    }
}

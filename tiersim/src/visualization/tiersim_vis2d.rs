use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::error::SimError;
use crate::simulation::engine::Simulation;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{GroupKind, NVec2};

#[derive(Component)]
struct BodyIndex(pub GroupKind, pub usize);

// Window edge in pixels; the unit square fills the window
const SIZE: f32 = 1000.0;

pub fn run_2d(scenario: Scenario) {
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} + {} bodies",
        scenario.simulation.group(GroupKind::Primary).len(),
        scenario.simulation.group(GroupKind::Secondary).len()
    );

    App::new()
        .insert_resource(scenario)
        // env_logger owns the `log` facade already
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Three Body".into(),
                        resolution: (SIZE, SIZE).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::log::LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

// unit square -> window coordinates centred on the origin
fn to_screen(x: &NVec2) -> Vec2 {
    Vec2::new((x.x as f32 - 0.5) * SIZE, (x.y as f32 - 0.5) * SIZE)
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for kind in [GroupKind::Primary, GroupKind::Secondary] {
        let group = scenario.simulation.group(kind);
        let mesh = Mesh2dHandle(meshes.add(Circle::new(group.radius() as f32)));
        let material = materials.add(ColorMaterial::from(Color::WHITE));

        for (i, x) in group.positions().iter().enumerate() {
            let p = to_screen(x);
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: mesh.clone(),
                    material: material.clone(),
                    transform: Transform::from_xyz(p.x, p.y, 0.0),
                    ..Default::default()
                },
                BodyIndex(kind, i),
            ));
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut exit: EventWriter<AppExit>) {
    if let Some(e) = step_frame(&mut scenario.simulation) {
        log::error!("stopping viewer: {e}");
        exit.send(AppExit::error());
    }
}

/// Advance one frame; only the step that fails reports its error, later
/// frames queued before the app exits do nothing
fn step_frame(simulation: &mut Simulation) -> Option<SimError> {
    if simulation.is_failed() {
        return None;
    }
    simulation.advance().err()
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(kind, i), mut transform) in &mut query {
        if let Some(x) = scenario.simulation.positions(*kind).get(*i) {
            let p = to_screen(x);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::params::{GroupParams, Parameters};
    use crate::simulation::states::BodyGroup;

    fn coincident_suns() -> Simulation {
        let suns = vec![NVec2::new(0.5, 0.5); 2];
        let primary = BodyGroup::new(GroupKind::Primary, GroupParams::new(2, 100.0, 10.0, 1.0e6), suns).unwrap();
        let planet = vec![NVec2::new(0.1, 0.1)];
        let secondary = BodyGroup::new(GroupKind::Secondary, GroupParams::new(1, 1.0, 3.0, 1.0e6), planet).unwrap();
        Simulation::new(primary, secondary, Parameters::default()).unwrap()
    }

    #[test]
    fn failure_is_reported_on_one_frame_only() {
        let mut sim = coincident_suns();

        assert!(matches!(step_frame(&mut sim), Some(SimError::CoincidentBodies { .. })));
        assert!(sim.is_failed());

        // frames drawn before the exit lands
        assert_eq!(step_frame(&mut sim), None);
        assert_eq!(step_frame(&mut sim), None);
        assert_eq!(sim.steps(), 0);
    }
}

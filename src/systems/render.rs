//! Rendering.
//!
//! [`compose_frame`] turns the simulation state into a list of
//! [`DrawRequest`]s without touching Raylib, and [`render_system`] draws that
//! list (plus the optional debug overlay) inside Raylib's drawing scope.
//!
//! Per frame the list holds the main track line, the visible fork segments,
//! one people label per branch while the fork is undecided, the trolley and
//! the score text.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::trolley::Trolley;
use crate::resources::debugmode::DebugMode;
use crate::resources::fork::{ActiveFork, Branch, ForkPhase};
use crate::resources::scheduler::ForkScheduler;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;

const TRACK_COLOR: Color = Color {
    r: 139,
    g: 69,
    b: 19,
    a: 255,
};
const TRACK_THICKNESS: f32 = 5.0;
const LABEL_OFFSET: f32 = 30.0;
const SCORE_FONT_SIZE: i32 = 30;
const FIGURE_SPACING: f32 = 12.0;

/// One thing to draw this frame, in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawRequest {
    /// The static horizontal track.
    MainTrack { from: Vector2, to: Vector2 },
    /// One branch of the active fork.
    ForkSegment {
        branch: Branch,
        from: Vector2,
        to: Vector2,
    },
    /// People waiting on an undecided branch.
    PeopleLabel {
        branch: Branch,
        center: Vector2,
        count: u32,
    },
    /// The trolley body, centred on `center`, rotated counter-clockwise.
    Trolley {
        center: Vector2,
        size: Vector2,
        angle: f32,
    },
    Score { text: String, position: Vector2 },
}

/// Build this frame's draw list.
pub fn compose_frame(
    active: &ActiveFork,
    trolley: Option<(&MapPosition, &Rotation, &Trolley)>,
    score: &Score,
    screen: &ScreenSize,
) -> Vec<DrawRequest> {
    let mut frame = Vec::with_capacity(7);
    let track_y = screen.track_y();

    frame.push(DrawRequest::MainTrack {
        from: Vector2 { x: 0.0, y: track_y },
        to: Vector2 {
            x: screen.right_edge(),
            y: track_y,
        },
    });

    if let Some(fork) = active.get() {
        for branch in fork.visible_branches() {
            let (from, to) = fork.segment(branch).points();
            frame.push(DrawRequest::ForkSegment { branch, from, to });
        }
        if !fork.is_decided() {
            for branch in Branch::ALL {
                let end = fork.segment(branch).endpoint();
                let offset = match branch {
                    Branch::A => -LABEL_OFFSET,
                    Branch::B => LABEL_OFFSET,
                };
                frame.push(DrawRequest::PeopleLabel {
                    branch,
                    center: Vector2 {
                        x: end.x,
                        y: end.y + offset,
                    },
                    count: fork.people(branch),
                });
            }
        }
    }

    if let Some((position, rotation, trolley)) = trolley {
        frame.push(DrawRequest::Trolley {
            center: position.pos,
            size: trolley.size,
            angle: rotation.degrees,
        });
    }

    frame.push(DrawRequest::Score {
        text: score.label(),
        position: Vector2 {
            x: screen.right_edge() - 200.0,
            y: 20.0,
        },
    });

    frame
}

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    active: Res<ActiveFork>,
    score: Res<Score>,
    scheduler: Res<ForkScheduler>,
    screen: Res<ScreenSize>,
    debug_mode: Option<Res<DebugMode>>,
    trolleys: Query<(&MapPosition, &Rotation, &Trolley)>,
) {
    let trolley = trolleys.iter().next();
    let frame = compose_frame(&active, trolley, &score, &screen);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::WHITE);
    for request in frame.iter() {
        draw_request(&mut d, request);
    }

    if debug_mode.is_some() {
        render_debug_ui(&mut d, &active, &scheduler, &score, trolley, &screen);
    }
}

fn draw_request(d: &mut RaylibDrawHandle, request: &DrawRequest) {
    match request {
        DrawRequest::MainTrack { from, to } | DrawRequest::ForkSegment { from, to, .. } => {
            d.draw_line_ex(*from, *to, TRACK_THICKNESS, TRACK_COLOR);
        }
        DrawRequest::PeopleLabel { center, count, .. } => {
            draw_people(d, *center, *count);
        }
        DrawRequest::Trolley {
            center,
            size,
            angle,
        } => {
            let body = Rectangle::new(center.x, center.y, size.x, size.y);
            let pivot = Vector2 {
                x: size.x * 0.5,
                y: size.y * 0.5,
            };
            // raylib rotates clockwise on screen
            d.draw_rectangle_pro(body, pivot, -angle, Color::RED);
        }
        DrawRequest::Score { text, position } => {
            d.draw_text(
                text,
                position.x as i32,
                position.y as i32,
                SCORE_FONT_SIZE,
                Color::BLACK,
            );
        }
    }
}

/// A row of stick figures centred on `center`, followed by the count.
fn draw_people(d: &mut RaylibDrawHandle, center: Vector2, count: u32) {
    let row_width = FIGURE_SPACING * count.saturating_sub(1) as f32;
    let first_x = center.x - row_width * 0.5;
    for i in 0..count {
        let x = first_x + FIGURE_SPACING * i as f32;
        let head = Vector2 {
            x,
            y: center.y - 8.0,
        };
        let hip = Vector2 {
            x,
            y: center.y + 3.0,
        };
        d.draw_circle_v(head, 3.0, Color::BLACK);
        d.draw_line_v(Vector2 { x, y: center.y - 5.0 }, hip, Color::BLACK);
        d.draw_line_v(
            Vector2 {
                x: x - 4.0,
                y: center.y - 2.0,
            },
            Vector2 {
                x: x + 4.0,
                y: center.y - 2.0,
            },
            Color::BLACK,
        );
        d.draw_line_v(
            hip,
            Vector2 {
                x: x - 3.0,
                y: center.y + 9.0,
            },
            Color::BLACK,
        );
        d.draw_line_v(
            hip,
            Vector2 {
                x: x + 3.0,
                y: center.y + 9.0,
            },
            Color::BLACK,
        );
    }
    d.draw_text(
        &count.to_string(),
        (first_x + row_width + FIGURE_SPACING) as i32,
        (center.y - 8.0) as i32,
        16,
        Color::DARKGRAY,
    );
}

fn render_debug_ui(
    d: &mut RaylibDrawHandle,
    active: &ActiveFork,
    scheduler: &ForkScheduler,
    score: &Score,
    trolley: Option<(&MapPosition, &Rotation, &Trolley)>,
    screen: &ScreenSize,
) {
    let fps = d.get_fps();
    d.draw_text(
        &format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
        10,
        10,
        10,
        Color::BLACK,
    );

    let phase = match active.phase() {
        ForkPhase::NoFork => format!(
            "No fork, next in {} frames",
            scheduler.cooldown().saturating_sub(scheduler.frames_idle())
        ),
        ForkPhase::Undecided => "Fork undecided".to_string(),
        ForkPhase::Transitioning(progress) => format!("Transition {:.0}%", progress * 100.0),
        ForkPhase::Settled => "Transition settled".to_string(),
    };
    d.draw_text(&phase, 10, 30, 10, Color::BLACK);

    if let Some((position, rotation, _)) = trolley {
        d.draw_text(
            &format!(
                "Trolley y: {:.1} angle: {:.1}",
                position.pos.y, rotation.degrees
            ),
            10,
            50,
            10,
            Color::BLACK,
        );
    }

    d.draw_text(
        &format!(
            "Decisions: {} Abstentions: {}",
            score.decisions(),
            score.abstentions()
        ),
        10,
        screen.h - 20,
        10,
        Color::BLACK,
    );
}

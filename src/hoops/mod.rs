//! Basketball toss flight simulation
//!
//! The arcade hoop shot, minus every pixel: a swipe launches the ball, the
//! ball flies under gravity with a little air drag, bounces off the side
//! walls, and lands on the floor. A shot scores at most once per flight,
//! when the descending ball passes through the inner rim. Three makes
//! complete the challenge.
//!
//! Coordinates are screen-style: x grows rightward, y grows downward, so
//! gravity is positive and an upward launch has negative vertical velocity.

/// Downward acceleration, units/s²
pub const GRAVITY: f64 = 1200.0;
/// Fractional velocity damping per second
pub const AIR_DRAG: f64 = 0.35;
/// Horizontal speed kept after a wall bounce
pub const WALL_RESTITUTION: f64 = 0.5;
/// Swipe-speed cap before launch shaping, units/s
pub const MAX_SWIPE_SPEED: f64 = 1400.0;
/// Hard cap on launch velocity components, units/s
pub const MAX_LAUNCH_SPEED: f64 = 1600.0;
/// Minimum upward launch speed, units/s
pub const MIN_UPWARD_SPEED: f64 = 200.0;
/// Swipes shorter than this are taps, not shots
pub const MIN_SWIPE_DISTANCE: f64 = 10.0;
/// Makes needed to complete the challenge
pub const TARGET_MAKES: u32 = 3;

const BALL_RADIUS: f64 = 14.0;
const HOOP_RADIUS: f64 = 44.0;
const FLOOR_MARGIN: f64 = 20.0;

/// A swipe gesture: pointer delta and how long it took
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub dx: f64,
    pub dy: f64,
    pub duration_ms: f64,
}

impl Swipe {
    /// Map the swipe to a launch velocity
    ///
    /// Swipe speed scales into launch speed (capped), mostly-upward swipes
    /// are steered into the -100°..-40° window, and the vertical component
    /// always carries at least the minimum upward speed. Returns `None` for
    /// a tap.
    #[must_use]
    pub fn launch_velocity(self) -> Option<(f64, f64)> {
        let dist = self.dx.hypot(self.dy);
        if dist < MIN_SWIPE_DISTANCE {
            return None;
        }

        let dt_ms = self.duration_ms.max(16.0);
        let speed = (dist / dt_ms * 2400.0).min(MAX_SWIPE_SPEED);
        let angle = self.dy.atan2(self.dx);

        // Steer swipes with any upward component into the shot window
        let theta = if angle.sin() < 0.0 {
            angle.clamp(
                -std::f64::consts::PI * 5.0 / 9.0,
                -std::f64::consts::PI * 2.0 / 9.0,
            )
        } else {
            angle
        };

        let vx = (theta.cos() * speed).clamp(-MAX_LAUNCH_SPEED, MAX_LAUNCH_SPEED);
        let vy = (theta.sin() * speed)
            .min(-MIN_UPWARD_SPEED)
            .clamp(-MAX_LAUNCH_SPEED, -MIN_UPWARD_SPEED);
        Some((vx, vy))
    }
}

/// The ball's kinematic state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub in_air: bool,
}

/// The hoop's position and rim radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hoop {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// What one simulation step produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Ball resting; nothing to simulate
    Idle,
    /// Ball still in flight
    Airborne,
    /// Ball passed through the rim this step
    ShotMade { makes: u32 },
    /// Third make: challenge complete, fired at most once per game
    ChallengeComplete,
    /// Flight ended on the floor without scoring (or after scoring)
    Landed,
}

/// One basketball-toss game on a fixed-size court
pub struct HoopsGame {
    width: f64,
    height: f64,
    ball: Ball,
    hoop: Hoop,
    makes: u32,
    scored_this_flight: bool,
    completion_signalled: bool,
}

impl HoopsGame {
    /// Set up a court; the hoop hangs centered near the top, the ball rests
    /// near the bottom
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let hoop = Hoop {
            x: width / 2.0,
            y: (height * 0.22).max(100.0),
            radius: HOOP_RADIUS,
        };
        let mut game = Self {
            width,
            height,
            ball: Ball {
                x: 0.0,
                y: 0.0,
                vx: 0.0,
                vy: 0.0,
                radius: BALL_RADIUS,
                in_air: false,
            },
            hoop,
            makes: 0,
            scored_this_flight: false,
            completion_signalled: false,
        };
        game.reset_ball();
        game
    }

    /// Put the ball back on its spot
    pub fn reset_ball(&mut self) {
        self.ball.x = self.width / 2.0 - 40.0;
        self.ball.y = self.height - 36.0;
        self.ball.vx = 0.0;
        self.ball.vy = 0.0;
        self.ball.in_air = false;
        self.scored_this_flight = false;
    }

    /// Launch the ball from a swipe
    ///
    /// Returns `false` when the ball is already flying or the swipe was
    /// just a tap.
    pub fn launch(&mut self, swipe: Swipe) -> bool {
        if self.ball.in_air {
            return false;
        }
        let Some((vx, vy)) = swipe.launch_velocity() else {
            return false;
        };
        self.ball.vx = vx;
        self.ball.vy = vy;
        self.ball.in_air = true;
        self.scored_this_flight = false;
        true
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f64) -> StepEvent {
        if !self.ball.in_air {
            return StepEvent::Idle;
        }

        self.ball.vy += GRAVITY * dt;
        let damp = (1.0 - AIR_DRAG * dt).max(0.0);
        self.ball.vx *= damp;
        self.ball.vy *= damp;
        self.ball.x += self.ball.vx * dt;
        self.ball.y += self.ball.vy * dt;

        // Side walls
        if self.ball.x - self.ball.radius < 0.0 {
            self.ball.x = self.ball.radius;
            self.ball.vx = -self.ball.vx * WALL_RESTITUTION;
        }
        if self.ball.x + self.ball.radius > self.width {
            self.ball.x = self.width - self.ball.radius;
            self.ball.vx = -self.ball.vx * WALL_RESTITUTION;
        }

        // Floor ends the flight; the ball stays where it lands
        if self.ball.y + self.ball.radius > self.height - FLOOR_MARGIN {
            self.ball.y = self.height - FLOOR_MARGIN - self.ball.radius;
            self.ball.in_air = false;
            self.scored_this_flight = false;
            return StepEvent::Landed;
        }

        if !self.scored_this_flight && self.ball.vy > 0.0 && self.through_rim() {
            self.scored_this_flight = true;
            self.makes += 1;
            if self.makes >= TARGET_MAKES && !self.completion_signalled {
                self.completion_signalled = true;
                return StepEvent::ChallengeComplete;
            }
            return StepEvent::ShotMade { makes: self.makes };
        }

        StepEvent::Airborne
    }

    /// Descending ball inside the inner rim, just under the rim plane and
    /// above the bottom of the net
    fn through_rim(&self) -> bool {
        let inner = self.hoop.radius - self.ball.radius * 0.75;
        let within_x = (self.ball.x - self.hoop.x).abs() < inner;
        let below_rim_top = self.ball.y - self.ball.radius > self.hoop.y - self.hoop.radius * 0.25;
        let above_net_bottom = self.ball.y + self.ball.radius < self.hoop.y + self.hoop.radius * 0.9;
        within_x && below_rim_top && above_net_bottom
    }

    #[inline]
    #[must_use]
    pub const fn ball(&self) -> Ball {
        self.ball
    }

    #[inline]
    #[must_use]
    pub const fn hoop(&self) -> Hoop {
        self.hoop
    }

    #[inline]
    #[must_use]
    pub const fn makes(&self) -> u32 {
        self.makes
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.makes >= TARGET_MAKES
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 120.0;

    fn game() -> HoopsGame {
        HoopsGame::new(420.0, 640.0)
    }

    /// Drop the ball straight down through the rim centre
    fn drop_through_hoop(game: &mut HoopsGame) -> Vec<StepEvent> {
        game.ball.x = game.hoop.x;
        game.ball.y = game.hoop.y - 120.0;
        game.ball.vx = 0.0;
        game.ball.vy = 50.0;
        game.ball.in_air = true;
        game.scored_this_flight = false;

        let mut events = Vec::new();
        for _ in 0..2000 {
            let event = game.step(DT);
            let done = event == StepEvent::Landed;
            events.push(event);
            if done {
                break;
            }
        }
        events
    }

    #[test]
    fn swipe_upward_launches() {
        let swipe = Swipe {
            dx: 10.0,
            dy: -120.0,
            duration_ms: 80.0,
        };
        let (vx, vy) = swipe.launch_velocity().unwrap();
        assert!(vy <= -MIN_UPWARD_SPEED);
        assert!(vx.abs() <= MAX_LAUNCH_SPEED);
    }

    #[test]
    fn tap_does_not_launch() {
        let tap = Swipe {
            dx: 3.0,
            dy: -4.0,
            duration_ms: 30.0,
        };
        assert_eq!(tap.launch_velocity(), None);

        let mut game = game();
        assert!(!game.launch(tap));
        assert!(!game.ball().in_air);
    }

    #[test]
    fn launch_angle_is_steered_into_window() {
        // Nearly horizontal swipe with a slight upward component
        let swipe = Swipe {
            dx: 200.0,
            dy: -5.0,
            duration_ms: 60.0,
        };
        let (vx, vy) = swipe.launch_velocity().unwrap();
        // Steering caps the angle at -40°, so |vy| >= |vx| * tan(40°)
        assert!(vy < 0.0);
        assert!(vy.abs() >= vx.abs() * (std::f64::consts::PI * 2.0 / 9.0).tan() * 0.99);
    }

    #[test]
    fn cannot_launch_mid_flight() {
        let mut game = game();
        let swipe = Swipe {
            dx: 40.0,
            dy: -200.0,
            duration_ms: 90.0,
        };
        assert!(game.launch(swipe));
        assert!(game.ball().in_air);
        assert!(!game.launch(swipe));
    }

    #[test]
    fn gravity_pulls_the_ball_down() {
        let mut game = game();
        game.launch(Swipe {
            dx: 0.0,
            dy: -150.0,
            duration_ms: 100.0,
        });
        let v0 = game.ball().vy;
        game.step(DT);
        assert!(game.ball().vy > v0);
    }

    #[test]
    fn flight_ends_on_the_floor() {
        let mut game = game();
        game.launch(Swipe {
            dx: 30.0,
            dy: -180.0,
            duration_ms: 100.0,
        });

        let mut landed = false;
        for _ in 0..5000 {
            if game.step(DT) == StepEvent::Landed {
                landed = true;
                break;
            }
        }
        assert!(landed, "ball never landed");
        assert!(!game.ball().in_air);
        assert_eq!(game.step(DT), StepEvent::Idle);
    }

    #[test]
    fn ball_stays_inside_the_walls() {
        let mut game = game();
        game.launch(Swipe {
            dx: 300.0,
            dy: -100.0,
            duration_ms: 40.0,
        });
        for _ in 0..5000 {
            let event = game.step(DT);
            let ball = game.ball();
            assert!(ball.x >= ball.radius - 1e-9);
            assert!(ball.x <= game.width() - ball.radius + 1e-9);
            if event == StepEvent::Landed {
                break;
            }
        }
    }

    #[test]
    fn dropping_through_the_rim_scores_once() {
        let mut game = game();
        let events = drop_through_hoop(&mut game);

        let makes: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, StepEvent::ShotMade { .. }))
            .collect();
        assert_eq!(makes.len(), 1, "one flight must score at most once");
        assert_eq!(game.makes(), 1);
    }

    #[test]
    fn third_make_completes_exactly_once() {
        let mut game = game();
        let mut completions = 0;
        for _ in 0..TARGET_MAKES {
            for event in drop_through_hoop(&mut game) {
                if event == StepEvent::ChallengeComplete {
                    completions += 1;
                }
            }
        }
        assert_eq!(game.makes(), TARGET_MAKES);
        assert!(game.is_complete());
        assert_eq!(completions, 1);

        // A fourth make still counts but never re-fires completion
        for event in drop_through_hoop(&mut game) {
            assert_ne!(event, StepEvent::ChallengeComplete);
        }
        assert_eq!(game.makes(), TARGET_MAKES + 1);
    }

    #[test]
    fn missing_the_rim_does_not_score() {
        let mut game = game();
        // Drop well to the side of the hoop
        game.ball.x = game.hoop.x - game.hoop.radius * 3.0;
        game.ball.y = game.hoop.y - 120.0;
        game.ball.vx = 0.0;
        game.ball.vy = 50.0;
        game.ball.in_air = true;

        for _ in 0..2000 {
            let event = game.step(DT);
            assert!(!matches!(event, StepEvent::ShotMade { .. }));
            if event == StepEvent::Landed {
                break;
            }
        }
        assert_eq!(game.makes(), 0);
    }
}

use match_core::geo::Coordinate;
use match_core::tiers::BadgeTrack;
use match_core::{CardAction, ColorBlindMode, PointerEvent, PreferenceChange};
use thiserror::Error;

use super::map_points::DEFAULT_CENTER;

pub const HELP: &[&str] = &[
    "Commands:",
    "  down X Y | move X Y | up      pointer input on the top card",
    "  drag DX                       press, move by DX and release",
    "  skip | like                   decide without dragging",
    "  refresh                       load a new batch",
    "  pref <field> <on|off>         screen-reader, contrast, motion, text",
    "  pref colorblind <mode>        none, protanopia, deuteranopia, tritanopia",
    "  pref reset                    restore default preferences",
    "  rank <points>                 volunteer rank for a point total",
    "  badge <track> <points>        badge level for one track",
    "  nearby [<lat> <lng> [km]]     activity map points around a location",
    "  view | help | quit",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Pointer(PointerEvent),
    Drag(f64),
    Action(CardAction),
    Refresh,
    Pref(PreferenceChange),
    PrefReset,
    Rank(u32),
    Badge(BadgeTrack, u32),
    Nearby {
        center: Coordinate,
        radius_km: Option<f64>,
    },
    View,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("unknown badge track `{0}`")]
    UnknownTrack(String),
    #[error("unknown preference `{0}`")]
    UnknownPreference(String),
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CommandError::Empty);
    };
    let args: Vec<&str> = words.collect();

    let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("down", [x, y]) => Command::Pointer(PointerEvent::Down {
            x: number(x)?,
            y: number(y)?,
        }),
        ("down", _) => return Err(CommandError::Usage("down X Y")),
        ("move", [x, y]) => Command::Pointer(PointerEvent::Move {
            x: number(x)?,
            y: number(y)?,
        }),
        ("move", _) => return Err(CommandError::Usage("move X Y")),
        ("up", []) => Command::Pointer(PointerEvent::Up),
        ("drag", [dx]) => Command::Drag(number(dx)?),
        ("drag", _) => return Err(CommandError::Usage("drag DX")),
        ("skip" | "pass", []) => Command::Action(CardAction::Skip),
        ("like" | "interested", []) => Command::Action(CardAction::ExpressInterest),
        ("refresh", []) => Command::Refresh,
        ("pref", ["reset"]) => Command::PrefReset,
        ("pref", [field, value]) => Command::Pref(preference(field, value)?),
        ("pref", _) => return Err(CommandError::Usage("pref <field> <value> | pref reset")),
        ("rank", [points]) => Command::Rank(points_arg(points)?),
        ("rank", _) => return Err(CommandError::Usage("rank <points>")),
        ("badge", [track, points]) => {
            let track = BadgeTrack::parse(track)
                .ok_or_else(|| CommandError::UnknownTrack(track.to_string()))?;
            Command::Badge(track, points_arg(points)?)
        }
        ("badge", _) => return Err(CommandError::Usage("badge <track> <points>")),
        ("nearby", []) => Command::Nearby {
            center: DEFAULT_CENTER,
            radius_km: None,
        },
        ("nearby", [lat, lng, rest @ ..]) if rest.len() <= 1 => Command::Nearby {
            center: Coordinate::new(number(lat)?, number(lng)?),
            radius_km: rest.first().map(|km| number(km)).transpose()?,
        },
        ("nearby", _) => return Err(CommandError::Usage("nearby <lat> <lng> [radius_km]")),
        ("view", []) => Command::View,
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        (other, _) => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn number(raw: &str) -> Result<f64, CommandError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::NotANumber(raw.to_string()))
}

fn points_arg(raw: &str) -> Result<u32, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::NotANumber(raw.to_string()))
}

fn preference(field: &str, value: &str) -> Result<PreferenceChange, CommandError> {
    let field = field.to_ascii_lowercase();
    if matches!(field.as_str(), "colorblind" | "color-blind") {
        let mode = ColorBlindMode::parse(value).ok_or(CommandError::Usage(
            "pref colorblind <none|protanopia|deuteranopia|tritanopia>",
        ))?;
        return Ok(PreferenceChange::ColorBlindMode(mode));
    }

    let on = match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => true,
        "off" | "false" | "no" => false,
        _ => return Err(CommandError::Usage("pref <field> <on|off>")),
    };
    match field.as_str() {
        "screen-reader" | "sr" => Ok(PreferenceChange::ScreenReaderOptimized(on)),
        "contrast" | "high-contrast" => Ok(PreferenceChange::HighContrast(on)),
        "motion" | "reduced-motion" => Ok(PreferenceChange::ReducedMotion(on)),
        "text" | "large-text" => Ok(PreferenceChange::LargeText(on)),
        _ => Err(CommandError::UnknownPreference(field)),
    }
}

use crate::util::round_trip;

use serato_tags::analysis::Analysis;
use serato_tags::autotags::Autotags;
use serato_tags::beatgrid::Beatgrid;
use serato_tags::markers::{MarkerType, Markers};
use serato_tags::markers2::{Marker, Markers2};
use serato_tags::overview::Overview;
use serato_tags::tag::TagFormat;
use serato_tags::tag::items::{Color, FlipAction, Position, Version};

#[test_log::test]
fn analysis() {
	let analysis = round_trip::<Analysis>("id3/analysis.bin", TagFormat::ID3);
	assert_eq!(analysis.version, Version::new(2, 1));
}

#[test_log::test]
fn autotags() {
	let autotags = round_trip::<Autotags>("id3/autotags.bin", TagFormat::ID3);
	assert_eq!(autotags.version, Version::new(1, 1));
	assert!((autotags.bpm - 115.0).abs() < f64::EPSILON);
	assert!((autotags.auto_gain - -3.257).abs() < f64::EPSILON);
	assert!(autotags.gain_db.abs() < f64::EPSILON);
}

#[test_log::test]
fn beatgrid() {
	let beatgrid = round_trip::<Beatgrid>("id3/beatgrid.bin", TagFormat::ID3);
	assert_eq!(beatgrid.version, Version::new(1, 0));
	assert_eq!(beatgrid.marker_count(), 3);
	assert_eq!(beatgrid.non_terminal_markers[0].beats_till_next_marker, 4);
	assert_eq!(beatgrid.non_terminal_markers[1].beats_till_next_marker, 8);
	assert!((beatgrid.terminal_marker.bpm - 115.0).abs() < f32::EPSILON);
	assert_eq!(beatgrid.footer, 0x13);
}

#[test_log::test]
fn markers() {
	let markers = round_trip::<Markers>("id3/markers.bin", TagFormat::ID3);
	assert_eq!(markers.version, Version::new(2, 5));
	assert_eq!(markers.entries.len(), 14);
	assert_eq!(markers.track_color, Color::from_rgb(0xFF99FF));

	let cues = markers.cues();
	assert_eq!(cues.len(), 2);
	assert_eq!(cues[0].position, Position::from(396));
	assert_eq!(cues[0].color, Color::from_rgb(0xCC0000));
	assert_eq!(cues[1].index, 1);

	let loops = markers.loops();
	assert_eq!(loops.len(), 1);
	assert_eq!(loops[0].start_position, Position::from(8_000));
	assert_eq!(loops[0].end_position, Position::from(16_000));
	assert!(loops[0].is_locked);

	// Unset slots are kept as placeholders
	assert_eq!(markers.entries[4].marker_type, MarkerType::Invalid);
	assert_eq!(markers.entries[13].marker_type, MarkerType::Loop);
	assert_eq!(markers.entries[13].start_position, None);
}

#[test_log::test]
fn markers2() {
	let markers2 = round_trip::<Markers2>("id3/markers2.bin", TagFormat::ID3);
	assert_eq!(markers2.version, Some(Version::new(1, 1)));
	assert_eq!(markers2.size, 470);
	assert_eq!(markers2.content.markers.len(), 6);

	assert_eq!(markers2.track_color(), Some(Color::from_rgb(0xFF99FF)));
	assert_eq!(markers2.bpm_locked(), Some(true));

	let cues = markers2.cues().collect::<Vec<_>>();
	assert_eq!(cues.len(), 2);
	assert_eq!(cues[0].label, "Intro");
	assert_eq!(cues[0].position, Position::from(396));
	assert_eq!(cues[1].label, "");

	let loops = markers2.loops().collect::<Vec<_>>();
	assert_eq!(loops.len(), 1);
	assert_eq!(loops[0].label, "Loop A");
	assert!(loops[0].is_locked);

	let flips = markers2.flips().collect::<Vec<_>>();
	assert_eq!(flips.len(), 1);
	assert_eq!(flips[0].label, "Radio Edit");
	assert!(flips[0].is_enabled);
	assert!(!flips[0].is_loop);
	assert!(matches!(flips[0].actions[0], FlipAction::Censor(_)));
	assert!(matches!(flips[0].actions[1], FlipAction::Jump(_)));
}

#[test_log::test]
fn markers2_unknown_records() {
	let markers2 = round_trip::<Markers2>("id3/markers2_unknown.bin", TagFormat::ID3);
	assert_eq!(markers2.content.markers.len(), 5);
	assert_eq!(markers2.track_color(), Some(Color::from_rgb(0x27AAE1)));

	let Marker::Unknown(tempo_map) = &markers2.content.markers[1] else {
		panic!("Expected an unknown entry, got {:?}", markers2.content.markers[1]);
	};
	assert_eq!(tempo_map.name, "TEMPOMAP");
	assert_eq!(tempo_map.data.len(), 14);
	assert_eq!(&tempo_map.data[10..], [0xDE, 0xAD, 0xBE, 0xEF]);

	let Marker::Unknown(empty) = &markers2.content.markers[4] else {
		panic!("Expected an unknown entry, got {:?}", markers2.content.markers[4]);
	};
	assert_eq!(empty.name, "EMPTY");
	assert!(empty.data.is_empty());

	let flips = markers2.flips().collect::<Vec<_>>();
	assert_eq!(flips.len(), 1);
	assert_eq!(flips[0].label, "Hidden");
	assert!(!flips[0].is_enabled);
	assert!(flips[0].is_loop);
	assert_eq!(flips[0].actions.len(), 3);
	assert!(matches!(flips[0].actions[0], FlipAction::Jump(_)));
	assert!(matches!(flips[0].actions[2], FlipAction::Censor(_)));

	let FlipAction::Unknown(action) = &flips[0].actions[1] else {
		panic!("Expected an unknown Flip action, got {:?}", flips[0].actions[1]);
	};
	assert_eq!(action.id, 7);
	assert_eq!(action.data, [1, 2, 3, 4, 5, 6]);
}

#[test_log::test]
fn overview() {
	let overview = round_trip::<Overview>("id3/overview.bin", TagFormat::ID3);
	assert_eq!(overview.version, Version::new(1, 5));
	assert_eq!(overview.blocks().count(), 240);
}

//! Audio, video and speech widgets

use super::factory::WidgetFactory;
use super::schema::PropertySpec;

const STREAM_FORMATS: &[&str] = &["png", "jpeg", "webp"];

const LOOP_POLICIES: &[&str] = &["once", "reflect", "loop"];

const BUTTON_TYPES: &[&str] = &["light", "default", "primary", "success", "warning", "danger"];

// Audio and Video expose the same media element state.
const MEDIA: &[PropertySpec] = &[
    PropertySpec::any("value"),
    PropertySpec::number("time", 0.0),
    PropertySpec::int("throttle", 250).bounded(Some(0), None),
    PropertySpec::boolean("paused", true),
    PropertySpec::boolean("muted", false),
    PropertySpec::boolean("autoplay", false),
    PropertySpec::boolean("loop", false),
    PropertySpec::optional_int("volume").bounded(Some(0), Some(100)),
];

const VIDEO_STREAM: &[PropertySpec] = &[
    PropertySpec::selector("format", STREAM_FORMATS, "png"),
    PropertySpec::boolean("paused", false),
    PropertySpec::boolean("snapshot", false),
    PropertySpec::optional_int("timeout").bounded(Some(0), None),
    PropertySpec::any("value"),
];

const PLAYER: &[PropertySpec] = &[
    PropertySpec::int("start", 0),
    PropertySpec::int("end", 10),
    PropertySpec::int("step", 1).bounded(Some(1), None),
    PropertySpec::int("value", 0),
    PropertySpec::int("interval", 500).bounded(Some(0), None),
    PropertySpec::int("direction", 0).bounded(Some(-1), Some(1)),
    PropertySpec::selector("loop_policy", LOOP_POLICIES, "once"),
    PropertySpec::boolean("show_loop_controls", true),
];

const SPEECH_TO_TEXT: &[PropertySpec] = &[
    PropertySpec::boolean("start", false),
    PropertySpec::boolean("stop", false),
    PropertySpec::boolean("abort", false),
    PropertySpec::array("grammars"),
    PropertySpec::string("lang", ""),
    PropertySpec::boolean("continuous", false),
    PropertySpec::boolean("interim_results", false),
    PropertySpec::int("max_alternatives", 1).bounded(Some(1), None),
    PropertySpec::string("service_uri", ""),
    PropertySpec::boolean("started", false),
    PropertySpec::boolean("audio_started", false),
    PropertySpec::boolean("sound_started", false),
    PropertySpec::boolean("speech_started", false),
    PropertySpec::selector("button_type", BUTTON_TYPES, "light"),
    PropertySpec::boolean("button_hide", false),
    PropertySpec::string("button_not_started", ""),
    PropertySpec::string("button_started", ""),
    PropertySpec::array("results"),
];

const TEXT_TO_SPEECH: &[PropertySpec] = &[
    PropertySpec::string("text", ""),
    PropertySpec::array("voices"),
    PropertySpec::boolean("paused", false),
    PropertySpec::boolean("pending", false),
    PropertySpec::boolean("speaking", false),
    PropertySpec::boolean("cancel", false),
    PropertySpec::boolean("pause", false),
    PropertySpec::boolean("resume", false),
    PropertySpec::object("speak"),
];

pub fn audio() -> WidgetFactory {
    WidgetFactory::new("Audio", "HTML5 audio player", MEDIA)
}

pub fn video() -> WidgetFactory {
    WidgetFactory::new("Video", "HTML5 video player", MEDIA)
}

pub fn video_stream() -> WidgetFactory {
    WidgetFactory::new("VideoStream", "Webcam stream with snapshot support", VIDEO_STREAM)
}

pub fn player() -> WidgetFactory {
    WidgetFactory::new("Player", "Playback controls over an integer range", PLAYER)
}

pub fn speech_to_text() -> WidgetFactory {
    WidgetFactory::new("SpeechToText", "Browser speech recognition", SPEECH_TO_TEXT)
}

pub fn text_to_speech() -> WidgetFactory {
    WidgetFactory::new("TextToSpeech", "Browser speech synthesis", TEXT_TO_SPEECH)
}

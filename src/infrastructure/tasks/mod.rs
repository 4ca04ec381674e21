mod exposure;

pub use exposure::{
    ACTION_CHANNEL, ActionChannel, ActionReceiver, ActionSender, ExposureTask, METER_CHANNEL,
    MeterChannel, MeterReceiver, MeterSender, send_action, send_meter_event,
};

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::{ACTION_CHANNEL_SIZE, METER_CHANNEL_SIZE};
use crate::controllers::ExposureController;
use crate::domain::dto::{MenuAction, MeterEvent};
use crate::domain::ports::ExposureUsecasesPort;

pub type ActionChannel = Channel<CriticalSectionRawMutex, MenuAction, ACTION_CHANNEL_SIZE>;
pub type ActionSender<'ch> = Sender<'ch, CriticalSectionRawMutex, MenuAction, ACTION_CHANNEL_SIZE>;
pub type ActionReceiver<'ch> =
    Receiver<'ch, CriticalSectionRawMutex, MenuAction, ACTION_CHANNEL_SIZE>;

pub type MeterChannel = Channel<CriticalSectionRawMutex, MeterEvent, METER_CHANNEL_SIZE>;
pub type MeterSender<'ch> = Sender<'ch, CriticalSectionRawMutex, MeterEvent, METER_CHANNEL_SIZE>;
pub type MeterReceiver<'ch> =
    Receiver<'ch, CriticalSectionRawMutex, MeterEvent, METER_CHANNEL_SIZE>;

/// Menu actions from the keypad, encoder and keyboard handlers
pub static ACTION_CHANNEL: ActionChannel = Channel::new();

/// Readings from the meter probe
pub static METER_CHANNEL: MeterChannel = Channel::new();

/// Queue a menu action, dropping it when the queue is full
pub fn send_action(sender: &ActionSender<'_>, action: MenuAction) -> bool {
    let sent = sender.try_send(action).is_ok();

    #[cfg(feature = "log")]
    if !sent {
        log::warn!("exposure: action queue full, dropped {:?}", action);
    }

    sent
}

/// Queue a meter event, dropping it when the queue is full
pub fn send_meter_event(sender: &MeterSender<'_>, event: MeterEvent) -> bool {
    let sent = sender.try_send(event).is_ok();

    #[cfg(feature = "log")]
    if !sent {
        log::warn!("exposure: meter queue full, dropped {:?}", event);
    }

    sent
}

/// Owner of the exposure job
///
/// Menu actions and meter events arrive from other contexts through the
/// channels and are applied here one at a time.
pub struct ExposureTask<'ch, U: ExposureUsecasesPort> {
    controller: ExposureController<U>,
    actions: ActionReceiver<'ch>,
    meter: MeterReceiver<'ch>,
}

impl<'ch, U: ExposureUsecasesPort> ExposureTask<'ch, U> {
    pub fn new(
        controller: ExposureController<U>,
        actions: ActionReceiver<'ch>,
        meter: MeterReceiver<'ch>,
    ) -> Self {
        Self {
            controller,
            actions,
            meter,
        }
    }

    pub fn controller(&self) -> &ExposureController<U> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ExposureController<U> {
        &mut self.controller
    }

    /// Wait for the next action or meter event and apply it
    pub async fn run_once(&mut self) {
        let next = select(self.actions.receive(), self.meter.receive()).await;
        match next {
            Either::First(action) => self.apply_action(action),
            Either::Second(event) => self.apply_meter_event(event),
        }
    }

    /// Apply actions and meter events forever
    pub async fn run(&mut self) {
        loop {
            self.run_once().await;
        }
    }

    /// Apply everything already queued without waiting
    ///
    /// Meter events go first so that actions see the latest readings.
    pub fn drain(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.meter.try_receive() {
            self.apply_meter_event(event);
            processed += 1;
        }
        while let Ok(action) = self.actions.try_receive() {
            self.apply_action(action);
            processed += 1;
        }
        processed
    }

    fn apply_action(&mut self, action: MenuAction) {
        if let Err(_e) = self.controller.handle(action) {
            #[cfg(feature = "log")]
            log::warn!("exposure: {:?} failed: {}", action, _e);
        }
    }

    fn apply_meter_event(&mut self, event: MeterEvent) {
        let usecases = self.controller.usecases_mut();
        match event {
            MeterEvent::Reading(lux) => {
                if let Err(_e) = usecases.add_meter_reading(lux) {
                    #[cfg(feature = "log")]
                    log::warn!("exposure: reading {} lux dropped: {}", lux, _e);
                }
            }
            MeterEvent::Clear => usecases.exposure_state_mut().clear_meter_readings(),
        }
    }
}

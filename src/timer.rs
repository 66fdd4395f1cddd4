use std::time::Duration;

/// Tarea periódica cancelable, avanzada a mano con el tiempo real
/// transcurrido (el `dt` del frame). No depende de relojes del sistema,
/// así que los tests la avanzan directamente.
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    interval: Duration,
    accumulated: Duration,
    running: bool,
}

impl PeriodicTask {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arranca con un contador nuevo; no hereda tiempo de una ejecución anterior.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulated = Duration::ZERO;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Cambiar el intervalo reprograma la tarea desde cero.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.accumulated = Duration::ZERO;
    }

    /// Devuelve cuántas veces se disparó durante `dt`.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.accumulated += dt;
        let mut fired = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Tiempo hasta el próximo disparo, para pedir el repintado justo.
    pub fn remaining(&self) -> Option<Duration> {
        self.running
            .then(|| self.interval.saturating_sub(self.accumulated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_task_never_fires() {
        let mut task = PeriodicTask::new(Duration::from_millis(250));
        assert_eq!(task.advance(Duration::from_secs(10)), 0);
        assert!(task.remaining().is_none());
    }

    #[test]
    fn test_fires_once_per_interval_and_keeps_remainder() {
        let mut task = PeriodicTask::new(Duration::from_millis(1000));
        task.start();
        assert_eq!(task.advance(Duration::from_millis(600)), 0);
        assert_eq!(task.advance(Duration::from_millis(600)), 1);
        assert_eq!(task.remaining(), Some(Duration::from_millis(800)));
        assert_eq!(task.advance(Duration::from_millis(3000)), 3);
    }

    #[test]
    fn test_stop_discards_partial_time() {
        let mut task = PeriodicTask::new(Duration::from_millis(1000));
        task.start();
        task.advance(Duration::from_millis(900));
        task.stop();
        task.start();
        assert_eq!(task.advance(Duration::from_millis(200)), 0);
    }

    #[test]
    fn test_set_interval_reschedules() {
        let mut task = PeriodicTask::new(Duration::from_millis(1000));
        task.start();
        task.advance(Duration::from_millis(900));
        task.set_interval(Duration::from_millis(250));
        assert_eq!(task.advance(Duration::from_millis(1000)), 4);
    }
}

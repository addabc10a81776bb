mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use board_io::button::{self, ActiveLevel, ButtonCallback, ButtonConfig, ButtonDriver, PressEvent};
    use board_io::Error;

    static SHORT_PRESSES: AtomicUsize = AtomicUsize::new(0);
    static LONG_PRESSES: AtomicUsize = AtomicUsize::new(0);

    fn on_short_press() {
        SHORT_PRESSES.fetch_add(1, Ordering::Relaxed);
    }

    fn on_long_press() {
        LONG_PRESSES.fetch_add(1, Ordering::Relaxed);
    }

    struct FakeHandle;

    /// Stands in for the platform button library.
    struct FakeDriver {
        create_result: Result<Option<FakeHandle>, Error>,
        created_with: Option<(u8, ActiveLevel)>,
        registered: Vec<(PressEvent, ButtonCallback)>,
    }

    impl FakeDriver {
        fn new(create_result: Result<Option<FakeHandle>, Error>) -> Self {
            Self {
                create_result,
                created_with: None,
                registered: Vec::new(),
            }
        }
    }

    impl ButtonDriver for FakeDriver {
        type Handle = FakeHandle;

        fn create(
            &mut self,
            gpio: u8,
            active_level: ActiveLevel,
        ) -> Result<Option<Self::Handle>, Error> {
            self.created_with = Some((gpio, active_level));
            core::mem::replace(&mut self.create_result, Ok(None))
        }

        fn register(
            &mut self,
            _handle: &mut Self::Handle,
            event: PressEvent,
            callback: ButtonCallback,
        ) {
            self.registered.push((event, callback));
        }
    }

    fn config() -> ButtonConfig {
        ButtonConfig {
            gpio: 9,
            active_level: ActiveLevel::Low,
            on_short_press: Some(on_short_press),
            on_long_press: Some(on_long_press),
        }
    }

    #[test]
    fn test_registers_both_callbacks() {
        let mut driver = FakeDriver::new(Ok(Some(FakeHandle)));
        let _button = button::init(&mut driver, &config()).unwrap();

        assert_eq!(driver.created_with, Some((9, ActiveLevel::Low)));
        assert_eq!(driver.registered.len(), 2);
        assert_eq!(driver.registered[0].0, PressEvent::SingleClick);
        assert_eq!(driver.registered[1].0, PressEvent::LongPressStart);

        // Dispatching what was registered reaches the configured handlers
        let before = SHORT_PRESSES.load(Ordering::Relaxed);
        (driver.registered[0].1)();
        assert_eq!(SHORT_PRESSES.load(Ordering::Relaxed), before + 1);

        let before = LONG_PRESSES.load(Ordering::Relaxed);
        (driver.registered[1].1)();
        assert_eq!(LONG_PRESSES.load(Ordering::Relaxed), before + 1);
    }

    #[test]
    fn test_unset_slots_are_skipped() {
        let mut driver = FakeDriver::new(Ok(Some(FakeHandle)));
        let config = ButtonConfig {
            on_short_press: None,
            ..config()
        };
        let _button = button::init(&mut driver, &config).unwrap();

        assert_eq!(driver.registered.len(), 1);
        assert_eq!(driver.registered[0].0, PressEvent::LongPressStart);
    }

    #[test]
    fn test_config_without_callbacks_is_invalid() {
        let mut driver = FakeDriver::new(Ok(Some(FakeHandle)));
        let config = ButtonConfig {
            on_short_press: None,
            on_long_press: None,
            ..config()
        };

        assert!(matches!(
            button::init(&mut driver, &config),
            Err(Error::InvalidArgument)
        ));
        // Rejected before touching the driver
        assert_eq!(driver.created_with, None);
    }

    #[test]
    fn test_missing_handle_fails_despite_ok_status() {
        let mut driver = FakeDriver::new(Ok(None));

        assert!(matches!(
            button::init(&mut driver, &config()),
            Err(Error::DeviceCreationFailed)
        ));
        assert!(driver.registered.is_empty());
    }

    #[test]
    fn test_creation_error_propagates() {
        let mut driver = FakeDriver::new(Err(Error::DeviceCreationFailed));

        assert!(matches!(
            button::init(&mut driver, &config()),
            Err(Error::DeviceCreationFailed)
        ));
    }
}

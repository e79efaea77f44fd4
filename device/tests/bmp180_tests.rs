#[cfg(feature = "std")]
mod tests {
    use futures::executor::block_on;
    use i2c_sensor_drivers::drivers::sensors::bmp180::{Bmp180, Bmp180Config};
    use i2c_sensor_drivers::testutil::*;
    use i2c_sensor_drivers::traits::i2c::I2cAddress;
    use i2c_sensor_drivers::{Error, ValidationError};

    const ADDR: u8 = 0x77;
    const CONTROL: u8 = 0xF4;
    const OUT: u8 = 0xF6;

    /// A bus holding the reference calibration, answering one temperature and
    /// one pressure conversion per round.
    fn reference_bus(rounds: usize) -> TestBus {
        let bus = TestBus::new();
        bus.set_registers(ADDR, 0xAA, &BMP180_CALIBRATION);
        let [t_msb, t_lsb] = BMP180_RAW_TEMPERATURE;
        let [p_msb, p_lsb, p_xlsb] = BMP180_RAW_PRESSURE;
        bus.script_register(ADDR, OUT, &[t_msb, p_msb].repeat(rounds));
        bus.script_register(ADDR, OUT + 1, &[t_lsb, p_lsb].repeat(rounds));
        bus.set_register(ADDR, OUT + 2, p_xlsb);
        bus
    }

    fn started(bus: &TestBus, delay: &TestDelay) -> Bmp180<TestBus, TestDelay> {
        let bmp = block_on(Bmp180::start(bus.clone(), delay.clone())).unwrap();
        bus.clear_transactions();
        bmp
    }

    #[test]
    fn test_start_reads_calibration_block() {
        let bus = reference_bus(1);
        let bmp = block_on(Bmp180::start(bus.clone(), TestDelay::new())).unwrap();

        assert_eq!(
            vec![Transaction::Read {
                address: ADDR,
                register: 0xAA,
                len: 22
            }],
            bus.transactions()
        );
        let c = bmp.coefficients();
        assert_eq!((408, -72, -14383), (c.ac1, c.ac2, c.ac3));
        assert_eq!((32741, 32757, 23153), (c.ac4, c.ac5, c.ac6));
        assert_eq!((6190, 4, -32768, -8711, 2868), (c.b1, c.b2, c.mb, c.mc, c.md));
    }

    #[test]
    fn test_temperature() {
        let bus = reference_bus(1);
        let delay = TestDelay::new();
        let mut bmp = started(&bus, &delay);

        let t = block_on(bmp.temperature()).unwrap();
        assert_eq!(15.0, t.raw_value());
        assert_eq!(vec![(CONTROL, vec![0x2E])], bus.writes());
        assert_eq!(vec![5], delay.delays_ms());
    }

    #[test]
    fn test_raw_temperature() {
        let bus = reference_bus(1);
        let mut bmp = started(&bus, &TestDelay::new());
        assert_eq!(27898, block_on(bmp.read_raw_temperature()).unwrap());
    }

    #[test]
    fn test_pressure_converts_temperature_first() {
        let bus = reference_bus(1);
        let delay = TestDelay::new();
        let mut bmp = started(&bus, &delay);

        let reading = block_on(bmp.pressure(0)).unwrap();
        assert_eq!(15.0, reading.temperature.raw_value());
        assert!((reading.pressure - 69964).abs() <= 3, "{}", reading.pressure);
        assert_eq!(
            vec![(CONTROL, vec![0x2E]), (CONTROL, vec![0x34])],
            bus.writes()
        );
        assert_eq!(vec![5, 5], delay.delays_ms());
    }

    #[test]
    fn test_conversion_delay_follows_oversampling() {
        for (mode, wait) in [(0, 5), (1, 8), (2, 14), (3, 26)] {
            let bus = reference_bus(1);
            let delay = TestDelay::new();
            let mut bmp = started(&bus, &delay);

            block_on(bmp.pressure(mode)).unwrap();
            assert_eq!(vec![5, wait], delay.delays_ms());
            assert_eq!((CONTROL, vec![0x34]), bus.writes()[1]);
        }
    }

    #[test]
    fn test_raw_pressure_shift() {
        let bus = reference_bus(1);
        bus.script_register(ADDR, OUT, &[0x5D]);
        bus.script_register(ADDR, OUT + 1, &[0x23]);
        bus.set_register(ADDR, OUT + 2, 0xC0);
        let mut bmp = started(&bus, &TestDelay::new());

        assert_eq!(0x5D23 << 3 | 0b110, block_on(bmp.read_raw_pressure(3)).unwrap());
    }

    #[test]
    fn test_invalid_mode_is_rejected_before_bus_traffic() {
        let bus = reference_bus(1);
        let delay = TestDelay::new();
        let mut bmp = started(&bus, &delay);

        let result = block_on(bmp.pressure(4));
        assert_eq!(
            Err(Error::Validation(ValidationError::OversamplingMode(4))),
            result.map(|r| r.pressure)
        );
        let result = block_on(bmp.read_raw_pressure(7));
        assert_eq!(
            Err(Error::Validation(ValidationError::OversamplingMode(7))),
            result
        );
        assert!(block_on(bmp.altitude(200, None)).is_err());

        assert!(bus.transactions().is_empty());
        assert!(delay.delays_ms().is_empty());
    }

    #[test]
    fn test_altitude() {
        let bus = reference_bus(2);
        let mut bmp = started(&bus, &TestDelay::new());

        let reading = block_on(bmp.altitude(0, None)).unwrap();
        assert!(
            reading.altitude > 3000.0 && reading.altitude < 3040.0,
            "{}",
            reading.altitude
        );

        let local = block_on(bmp.altitude(0, Some(reading.pressure))).unwrap();
        assert_eq!(reading.pressure, local.pressure);
        assert!(local.altitude.abs() < 0.01, "{}", local.altitude);
    }

    #[test]
    fn test_custom_address() {
        let bus = TestBus::new();
        bus.set_registers(0x76, 0xAA, &BMP180_CALIBRATION);
        let config = Bmp180Config {
            address: I2cAddress::new(0x76),
        };
        let bmp = block_on(Bmp180::start_with_config(bus.clone(), TestDelay::new(), config)).unwrap();
        assert_eq!(408, bmp.coefficients().ac1);
        assert!(bus
            .transactions()
            .iter()
            .all(|t| matches!(t, Transaction::Read { address: 0x76, .. })));
    }

    #[test]
    fn test_bus_error_during_start() {
        let bus = reference_bus(1);
        bus.fail_on_read(ADDR, 0xAA);
        let result = block_on(Bmp180::start(bus, TestDelay::new()));
        assert!(matches!(
            result,
            Err(Error::Bus(TestBusError {
                address: ADDR,
                register: 0xAA
            }))
        ));
    }

    #[test]
    fn test_bus_error_during_conversion() {
        let bus = reference_bus(1);
        let delay = TestDelay::new();
        let mut bmp = started(&bus, &delay);
        bus.fail_on_write(ADDR, CONTROL);

        let result = block_on(bmp.pressure(1));
        assert_eq!(
            Err(Error::Bus(TestBusError {
                address: ADDR,
                register: CONTROL
            })),
            result.map(|r| r.pressure)
        );
        assert!(delay.delays_ms().is_empty());
    }
}

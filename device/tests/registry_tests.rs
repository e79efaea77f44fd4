#[cfg(feature = "std")]
mod tests {
    use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embassy_sync::mutex::Mutex;
    use futures::executor::block_on;
    use futures::future::join;
    use i2c_sensor_drivers::drivers::sensors::l3g4200d::{DeviceState, L3g4200d, L3g4200dConfig};
    use i2c_sensor_drivers::testutil::*;
    use i2c_sensor_drivers::traits::driver::Driver;
    use i2c_sensor_drivers::traits::sensors::gyroscope::Gyroscope;
    use i2c_sensor_drivers::traits::sensors::temperature::TemperatureSensor;
    use i2c_sensor_drivers::{AnySensor, Bmp180, SensorKind};

    fn bmp180_bus() -> TestBus {
        let bus = TestBus::new();
        bus.set_registers(0x77, 0xAA, &BMP180_CALIBRATION);
        bus.set_registers(0x77, 0xF6, &BMP180_RAW_TEMPERATURE);
        bus
    }

    fn gyro_bus() -> TestBus {
        let bus = TestBus::new();
        bus.set_register(0x69, 0x0F, 0xD3);
        bus.set_register(0x69, 0x27, 0x08);
        bus
    }

    #[test]
    fn test_start_by_name() {
        let kind = SensorKind::from_name("bmp180").unwrap();
        let sensor = block_on(kind.start(bmp180_bus(), TestDelay::new())).unwrap();
        assert_eq!(SensorKind::Bmp180, sensor.kind());
        assert_eq!(
            &["get_pressure", "get_temperature", "get_altitude"],
            sensor.commands()
        );
        match sensor {
            AnySensor::Bmp180(mut bmp) => {
                assert_eq!(15.0, block_on(bmp.temperature()).unwrap().raw_value())
            }
            _ => panic!("expected a bmp180"),
        }

        let kind = SensorKind::from_name("l3g4200d").unwrap();
        let sensor = block_on(kind.start(gyro_bus(), TestDelay::new())).unwrap();
        assert_eq!(SensorKind::L3g4200d, sensor.kind());
        match sensor {
            AnySensor::L3g4200d(gyro) => assert_eq!(DeviceState::Ready, gyro.state()),
            _ => panic!("expected a l3g4200d"),
        }
    }

    #[test]
    fn test_failed_start_is_reported() {
        let bus = gyro_bus();
        bus.set_register(0x69, 0x0F, 0x00);
        let result = block_on(SensorKind::L3g4200d.start(bus, TestDelay::new()));
        assert!(result.is_err());
    }

    #[test]
    fn test_driver_trait() {
        assert_eq!("bmp180", <Bmp180<TestBus, TestDelay> as Driver<TestBus, TestDelay>>::NAME);
        assert_eq!("l3g4200d", <L3g4200d<TestBus, TestDelay> as Driver<TestBus, TestDelay>>::NAME);

        let mut gyro = block_on(<L3g4200d<TestBus, TestDelay> as Driver<TestBus, TestDelay>>::start(
            gyro_bus(),
            TestDelay::new(),
        ))
        .unwrap();
        assert_eq!(5, gyro.commands().len());
        let rate = block_on(gyro.angular_rate()).unwrap();
        assert_eq!(0.0, rate.x);

        let mut bmp = block_on(<Bmp180<TestBus, TestDelay> as Driver<TestBus, TestDelay>>::start(
            bmp180_bus(),
            TestDelay::new(),
        ))
        .unwrap();
        let t = block_on(TemperatureSensor::temperature(&mut bmp)).unwrap();
        assert_eq!(15.0, t.raw_value());
    }

    #[test]
    fn test_sensors_share_one_bus() {
        let bus = TestBus::new();
        bus.set_registers(0x77, 0xAA, &BMP180_CALIBRATION);
        bus.set_registers(0x77, 0xF6, &BMP180_RAW_TEMPERATURE);
        bus.set_register(0x69, 0x0F, 0xD3);
        bus.set_register(0x69, 0x27, 0x08);
        let shared = Mutex::<NoopRawMutex, _>::new(bus.clone());

        let mut gyro = L3g4200d::new(
            I2cDevice::new(&shared),
            TestDelay::new(),
            L3g4200dConfig {
                samples: 20,
                ..Default::default()
            },
        );
        let bmp = async {
            match Bmp180::start(I2cDevice::new(&shared), TestDelay::new()).await {
                Ok(mut bmp) => bmp.temperature().await,
                Err(e) => Err(e),
            }
        };
        let (gyro_result, temperature) = block_on(join(gyro.start(), bmp));

        assert!(gyro_result.is_ok());
        assert_eq!(15.0, temperature.unwrap().raw_value());
        assert_eq!(DeviceState::Ready, gyro.state());

        let transactions = bus.transactions();
        let addresses: Vec<u8> = transactions
            .iter()
            .map(|t| match t {
                Transaction::Read { address, .. } | Transaction::Write { address, .. } => *address,
            })
            .collect();
        assert!(addresses.contains(&0x77));
        assert!(addresses.contains(&0x69));
    }
}

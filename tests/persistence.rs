mod tests {
    use myrtio_light_pwm::calibration::{CalibrationEntry, CalibrationTable};
    use myrtio_light_pwm::duty::ChannelId;
    use myrtio_light_pwm::persistence::{
        CalibrationStore, PersistenceError, load_calibration, save_calibration,
    };

    struct MemoryStore {
        data: Result<Vec<u8>, PersistenceError>,
    }

    impl MemoryStore {
        fn empty() -> Self {
            Self {
                data: Err(PersistenceError::NotFound),
            }
        }
    }

    impl CalibrationStore for MemoryStore {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, PersistenceError> {
            let data = self.data.as_ref().map_err(|err| *err)?;
            let len = data.len().min(buf.len());
            buf[..len].copy_from_slice(&data[..len]);
            Ok(data.len())
        }

        fn write(&mut self, data: &[u8]) -> Result<(), PersistenceError> {
            self.data = Ok(data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_missing_record_uses_defaults() {
        let mut store = MemoryStore::empty();
        let table = load_calibration::<_, 4>(&mut store);
        assert_eq!(table, CalibrationTable::new());
        assert!(
            table
                .entries()
                .iter()
                .all(|entry| *entry == CalibrationEntry::new(2867, 1024))
        );
    }

    #[test]
    fn test_driver_error_uses_defaults() {
        let mut store = MemoryStore {
            data: Err(PersistenceError::Driver),
        };
        assert_eq!(load_calibration::<_, 4>(&mut store), CalibrationTable::new());
    }

    #[test]
    fn test_size_mismatch_uses_defaults() {
        let mut store = MemoryStore {
            data: Ok(vec![0xAA; 12]),
        };
        assert_eq!(load_calibration::<_, 4>(&mut store), CalibrationTable::new());

        let mut store = MemoryStore {
            data: Ok(vec![0xAA; 20]),
        };
        assert_eq!(load_calibration::<_, 4>(&mut store), CalibrationTable::new());
    }

    #[test]
    fn test_save_then_load() {
        let mut table = CalibrationTable::<4>::new();
        table
            .set(ChannelId::new(1), CalibrationEntry::new(2400, 900))
            .unwrap();
        table
            .set(ChannelId::new(3), CalibrationEntry::IDENTITY)
            .unwrap();

        let mut store = MemoryStore::empty();
        save_calibration(&mut store, &table).unwrap();
        assert_eq!(
            store.data.as_ref().map(Vec::len),
            Ok(CalibrationTable::<4>::BYTE_LEN)
        );

        assert_eq!(load_calibration::<_, 4>(&mut store), table);
    }

    #[test]
    fn test_byte_image() {
        assert_eq!(CalibrationTable::<12>::BYTE_LEN, 48);

        let table = CalibrationTable::<2>::uniform(CalibrationEntry::new(0x0102, 0x0304));
        let bytes = table.as_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(CalibrationTable::<2>::from_bytes(bytes), Some(table));
        assert_eq!(CalibrationTable::<2>::from_bytes(&bytes[1..]), None);
        assert_eq!(CalibrationTable::<3>::from_bytes(bytes), None);
    }
}

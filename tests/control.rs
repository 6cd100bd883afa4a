mod tests {
    use dress_light::color::RED;
    use dress_light::control::{TryReceiveError, TrySendError};
    use dress_light::{ControlChannel, ControlIntent, Mode, PendingControl};

    #[test]
    fn test_channel_is_bounded() {
        let channel = ControlChannel::<2>::new();
        let sender = channel.sender();
        assert!(sender.set_brightness(10).is_ok());
        assert!(sender.halt().is_ok());
        assert_eq!(
            sender.set_mode(Mode::Fire),
            Err(TrySendError(ControlIntent::SetMode(Mode::Fire)))
        );
    }

    #[test]
    fn test_channel_is_fifo() {
        let channel = ControlChannel::<4>::new();
        channel.sender().set_brightness(1).unwrap();
        channel.sender().set_brightness(2).unwrap();

        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Ok(ControlIntent::SetBrightness(1)));
        assert_eq!(receiver.try_receive(), Ok(ControlIntent::SetBrightness(2)));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_drain_keeps_latest_intent() {
        let channel = ControlChannel::<8>::new();
        let sender = channel.sender();
        sender.set_brightness(10).unwrap();
        sender.set_mode(Mode::Solid(RED)).unwrap();
        sender.set_brightness(20).unwrap();

        let pending = channel.receiver().drain();
        assert_eq!(
            pending,
            PendingControl {
                mode: Some(Mode::Solid(RED)),
                brightness: Some(20),
                halt: false,
            }
        );
        assert!(channel.receiver().drain().is_empty());
    }
}

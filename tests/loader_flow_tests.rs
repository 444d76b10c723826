// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::sync::{Arc, Mutex};

use loadwise::capability::{BatteryStatus, ConnectionType, DeviceClass, NetworkInfo, StaticProbe};
use loadwise::config::Settings;
use loadwise::strategy::{ImageSize, Quality, RuntimeMetrics};
use loadwise::AdaptiveLoader;

fn high_end_probe() -> StaticProbe {
    StaticProbe {
        memory_gb: Some(16.0),
        cpu_cores: Some(12),
        network: Some(NetworkInfo {
            connection_type: ConnectionType::Wifi,
            downlink_mbps: 100.0,
            rtt_ms: 10.0,
            data_saver: false,
        }),
        battery: Some(BatteryStatus::new(0.9, true)),
        performance_score: Some(95.0),
    }
}

#[tokio::test]
async fn test_full_lifecycle_event_order() {
    let loader = AdaptiveLoader::new(Settings::default(), Arc::new(high_end_probe()));
    let log = Arc::new(Mutex::new(Vec::new()));

    let l = log.clone();
    loader.events().capabilities_detected.subscribe(move |_| {
        l.lock().unwrap().push("capabilitiesDetected");
        Ok(())
    });
    let l = log.clone();
    loader.events().strategy_determined.subscribe(move |_| {
        l.lock().unwrap().push("strategyDetermined");
        Ok(())
    });
    let l = log.clone();
    loader.events().network_change.subscribe(move |_| {
        l.lock().unwrap().push("networkChange");
        Ok(())
    });
    let l = log.clone();
    loader.events().strategy_adjusted.subscribe(move |_| {
        l.lock().unwrap().push("strategyAdjusted");
        Ok(())
    });

    let strategy = loader.initialize().await;
    assert_eq!(strategy.image_quality, Quality::High);
    assert_eq!(
        loader.capabilities().unwrap().device_class(),
        DeviceClass::HighEnd
    );

    loader.handle_network_change(NetworkInfo {
        connection_type: ConnectionType::Slow2G,
        downlink_mbps: 0.1,
        rtt_ms: 2000.0,
        data_saver: true,
    });
    assert!(loader.is_slow_connection());
    assert_eq!(loader.strategy().unwrap().max_concurrent_requests, 2);

    loader.adjust_for_runtime(&RuntimeMetrics {
        memory_usage: 0.2,
        cpu_usage: 0.2,
        network_latency_ms: 3000.0,
        fps: 60.0,
    });
    assert_eq!(loader.strategy().unwrap().request_timeout_ms, 20_000);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "capabilitiesDetected",
            "strategyDetermined",
            "networkChange",
            "strategyDetermined",
            "strategyAdjusted",
        ]
    );
}

#[tokio::test]
async fn test_recommendations_reflect_conditions() {
    let loader = AdaptiveLoader::new(Settings::default(), Arc::new(high_end_probe()));
    loader.initialize().await;
    assert!(loader
        .recommendations()
        .iter()
        .any(|note| note.starts_with("High-end device")));

    loader.handle_battery_change(BatteryStatus::new(0.05, false));
    loader.handle_network_change(NetworkInfo {
        connection_type: ConnectionType::Cellular3G,
        downlink_mbps: 0.8,
        rtt_ms: 350.0,
        data_saver: true,
    });

    let notes = loader.recommendations();
    assert!(notes.iter().any(|note| note.starts_with("Slow connection")));
    assert!(notes.iter().any(|note| note.starts_with("Data saver")));
    assert!(notes.iter().any(|note| note.starts_with("Low battery")));
}

#[tokio::test]
async fn test_unsubscribed_listener_not_called() {
    let loader = AdaptiveLoader::new(Settings::default(), Arc::new(high_end_probe()));
    let calls = Arc::new(Mutex::new(0));

    let c = calls.clone();
    let id = loader.events().strategy_determined.subscribe(move |_| {
        *c.lock().unwrap() += 1;
        Ok(())
    });
    loader.initialize().await;
    assert!(loader.events().strategy_determined.unsubscribe(id));
    loader.refresh().await;

    assert_eq!(*calls.lock().unwrap(), 1);
    assert!(loader.events().strategy_determined.is_empty());
}

#[tokio::test]
async fn test_shared_across_tasks() {
    let loader = Arc::new(AdaptiveLoader::new(
        Settings::default(),
        Arc::new(high_end_probe()),
    ));
    loader.initialize().await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let loader = loader.clone();
            tokio::spawn(async move {
                let size = loader.optimal_image_size(ImageSize::new(800 + i, 600));
                (loader.should_load("image", 10), size)
            })
        })
        .collect();

    for handle in handles {
        let (load, size) = handle.await.unwrap();
        assert!(load);
        assert_eq!(size.height, 600);
    }
}

#[tokio::test]
async fn test_missing_probe_readings_use_defaults() {
    let probe = StaticProbe {
        performance_score: Some(50.0),
        ..Default::default()
    };
    let loader = AdaptiveLoader::new(Settings::default(), Arc::new(probe));
    loader.initialize().await;

    let snapshot = loader.capabilities().unwrap();
    assert_eq!(snapshot.memory_gb(), 4.0);
    assert_eq!(snapshot.cpu_cores(), 4);
    assert_eq!(snapshot.connection_type(), ConnectionType::Unknown);
    // No network information reads as a slow connection
    assert!(snapshot.is_slow_connection());
}

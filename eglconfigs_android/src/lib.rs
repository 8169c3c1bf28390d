//! JNI glue for `android.egl.listeglconfigs.ListEGLConfigs`.

#![allow(non_snake_case)]

use jni::objects::JClass;
use jni::sys::jint;
use jni::JNIEnv;

/// Tag of the logcat records.
pub const LOG_TAG: &str = "ListEGLConfigs";

#[cfg(target_os = "android")]
fn init_logger() {
    use android_logger::Config;
    use log::LevelFilter;

    // Note: Android debug logs are stripped from a release build.
    // debug!() will only show in a debug build.
    android_logger::init_once(
        Config::default().with_max_level(LevelFilter::Debug).with_tag(LOG_TAG),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logger() {}

#[no_mangle]
pub extern "system" fn Java_android_egl_listeglconfigs_ListEGLConfigs_init(
    _env: JNIEnv,
    _class: JClass,
    width: jint,
    height: jint,
) {
    init_logger();
    log::debug!("init {width}x{height}");
    eglconfigs::host::init(width, height);
}

#[no_mangle]
pub extern "system" fn Java_android_egl_listeglconfigs_ListEGLConfigs_step(
    _env: JNIEnv,
    _class: JClass,
) {
    eglconfigs::host::step();
}

#[no_mangle]
pub extern "system" fn Java_android_egl_listeglconfigs_ListEGLConfigs_uninit(
    _env: JNIEnv,
    _class: JClass,
) {
    eglconfigs::host::uninit();
}

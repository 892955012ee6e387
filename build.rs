fn main() {
    // Without the `refprop` feature the crate is pure Rust and nothing is linked.
    #[cfg(feature = "refprop")]
    refprop::build();
}

#[cfg(feature = "refprop")]
mod refprop {
    use std::{env, path::PathBuf, process::Command};

    use cmake::Config;
    use git2::Repository;

    pub fn build() {
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
        let lib_dir = out_dir.join("lib");
        let refprop_cmake_dir = out_dir.join("REFPROP-cmake");

        if !refprop_cmake_dir.exists() {
            println!("Cloning REFPROP-cmake repository...");
            Repository::clone_recurse(
                "https://github.com/ahjortland/REFPROP-cmake.git",
                &refprop_cmake_dir,
            )
            .expect("Failed to clone REFPROP-cmake.");
        }

        // The Fortran sources ship with a licensed REFPROP install.
        let fortran_dir = PathBuf::from(
            env::var("REFPROP_SRC_DIR").expect("REFPROP_SRC_DIR environment variable not set."),
        );

        #[cfg(target_os = "macos")]
        let default_compiler = "/opt/homebrew/bin/gfortran";
        #[cfg(not(target_os = "macos"))]
        let default_compiler = "gfortran";

        let fortran_compiler =
            env::var("CMAKE_FORTRAN_COMPILER").unwrap_or_else(|_| default_compiler.to_string());
        let python_executable =
            env::var("PYTHON_EXECUTABLE").unwrap_or_else(|_| "python3".to_string());

        for tool in [&fortran_compiler, &python_executable] {
            let ok = Command::new(tool)
                .arg("--version")
                .output()
                .map(|out| out.status.success())
                .unwrap_or(false);
            if !ok {
                panic!("{tool:?} not found. Install it or point the matching env variable at it.");
            }
        }

        let build_type = env::var("CMAKE_BUILD_TYPE").unwrap_or_else(|_| "Release".to_string());

        Config::new(&refprop_cmake_dir)
            .define("REFPROP_FORTRAN_PATH", &fortran_dir)
            .define("CMAKE_FORTRAN_COMPILER", &fortran_compiler)
            .define("CMAKE_BUILD_TYPE", &build_type)
            .define("PYTHON_EXECUTABLE", &python_executable)
            .build();

        println!("cargo:rustc-link-search=native={}", lib_dir.display());
        println!("cargo:rustc-link-lib=dylib=refprop");
        println!("cargo:rerun-if-env-changed=REFPROP_SRC_DIR");
        println!(
            "cargo:rerun-if-changed={}/CMakeLists.txt",
            refprop_cmake_dir.display()
        );

        let headers_dir = out_dir.join("include");
        let header_file = headers_dir.join("REFPROP.h");
        if !header_file.exists() {
            panic!(
                "C header file not found at {}. Ensure that REFPROP-cmake generates C headers.",
                header_file.display()
            )
        }

        // Only the routines the state engine calls.
        let bindings = bindgen::Builder::default()
            .header(header_file.to_str().unwrap())
            .clang_arg(format!("-I{}", headers_dir.display()))
            .allowlist_function("(SETUP|WMOL|TRNPRP|SURTEN|CVCP|ERRMSG)dll")
            .allowlist_function("(TP|TD|TH|TS|TE|TQ|PD|PH|PS|PE|PQ|DH|DS|DE|HS|ES)FLSHdll")
            .generate()
            .expect("Unable to generate bindings with bindgen.");

        let bindings_out_path = out_dir.join("bindings.rs");
        bindings
            .write_to_file(&bindings_out_path)
            .expect("Couldn't write bindings.");

        println!(
            "cargo:rustc-env=BINDINGS_PATH={}",
            bindings_out_path.display()
        );
    }
}

use std::env;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
#[path = "src/header.rs"]
mod header;

use header::{HeaderChoice, HeaderVariant};

/// Include dirs, link dirs, defines and a label describing where they came from.
struct Probe {
    source: String,
    include_dirs: Vec<PathBuf>,
    link_dirs: Vec<PathBuf>,
    defines: Vec<(String, Option<String>)>,
    // pkg-config already printed the link directives
    linked: bool,
}

fn probe_pkg_config(no_wide: bool) -> Option<Probe> {
    let names: &[&str] = if no_wide {
        &["ncurses"]
    } else {
        &["ncursesw", "ncurses"]
    };
    for name in names {
        if let Ok(lib) = pkg_config::Config::new().probe(name) {
            return Some(Probe {
                source: format!("pkg-config:{}", name),
                include_dirs: lib.include_paths,
                link_dirs: lib.link_paths,
                defines: lib.defines.into_iter().collect(),
                linked: true,
            });
        }
    }
    None
}

fn probe_env() -> Option<Probe> {
    let inc = env::var("NCURSES_SHIM_INCLUDE_DIR").ok()?;
    let mut link_dirs = Vec::new();
    if let Ok(dir) = env::var("NCURSES_SHIM_LIB_DIR") {
        link_dirs.push(PathBuf::from(dir));
    } else if let Some(libdir) = inc.strip_suffix("/include").map(|p| format!("{}/lib", p)) {
        // Infer libdir from includedir by replacing trailing "/include" with "/lib"
        link_dirs.push(PathBuf::from(libdir));
    }
    Some(Probe {
        source: "env:NCURSES_SHIM_INCLUDE_DIR".into(),
        include_dirs: vec![PathBuf::from(inc)],
        link_dirs,
        defines: Vec::new(),
        linked: false,
    })
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/header.rs");
    println!("cargo:rerun-if-changed=csrc");
    for var in [
        "NCURSES_SHIM_INCLUDE_DIR",
        "NCURSES_SHIM_LIB_DIR",
        "NCURSES_SHIM_NO_WIDE",
    ] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rustc-check-cfg=cfg(nc_wide)");
    println!("cargo:rustc-check-cfg=cfg(nc_ccharw_max)");

    let no_wide = env::var("NCURSES_SHIM_NO_WIDE").is_ok_and(|v| v != "0" && !v.is_empty());
    let attrs_only = env::var_os("CARGO_FEATURE_ATTRS_ONLY").is_some();

    // Explicit configuration wins over pkg-config, which wins over system defaults
    let probe = probe_env()
        .or_else(|| probe_pkg_config(no_wide))
        .unwrap_or_else(|| Probe {
            source: "system".into(),
            include_dirs: Vec::new(),
            link_dirs: Vec::new(),
            defines: Vec::new(),
            linked: false,
        });

    let mut search_dirs = probe.include_dirs.clone();
    search_dirs.extend(header::default_search_dirs());
    // A plain ncurses.pc means the wide library is not what gets linked
    let plain_only = no_wide || probe.source == "pkg-config:ncurses";
    let selected = if plain_only {
        header::select_plain(&search_dirs)
    } else {
        header::select_header(&search_dirs)
    };
    let choice: HeaderChoice = selected.unwrap_or_else(|| {
        panic!(
            "ncurses headers not found: looked for {}/{} and {} in {:?}; \
             install the ncurses development package or set NCURSES_SHIM_INCLUDE_DIR",
            header::WIDE_SUBDIR,
            header::HEADER_NAME,
            header::HEADER_NAME,
            search_dirs
        )
    });
    if probe.source == "system" {
        println!(
            "cargo:warning=ncurses not found via pkg-config, using {}",
            choice.path.display()
        );
    }

    // -I on a compiler default dir reorders the system search path
    let compiler_dirs = [Path::new("/usr/include"), Path::new("/usr/local/include")];
    let mut include_dirs = Vec::new();
    if !compiler_dirs.contains(&choice.include_root.as_path()) {
        include_dirs.push(choice.include_root.clone());
    }
    include_dirs.extend(probe.include_dirs.iter().cloned());
    let wide_flag = match choice.variant {
        HeaderVariant::Wide => "1",
        HeaderVariant::Plain => "0",
    };

    let mut defines: Vec<(String, Option<String>)> = probe.defines.clone();
    defines.push(("NC_SHIM_WIDE".into(), Some(wide_flag.into())));
    if attrs_only {
        defines.push(("NC_SHIM_ATTRS_ONLY".into(), None));
    }

    // Generate bindings
    let shim_header = if attrs_only {
        "csrc/nc_attrs.h"
    } else {
        "csrc/nc_shim.h"
    };
    let mut clang_args: Vec<String> = include_dirs
        .iter()
        .map(|d| format!("-I{}", d.display()))
        .collect();
    clang_args.extend(defines.iter().map(|(k, v)| match v {
        Some(v) => format!("-D{}={}", k, v),
        None => format!("-D{}", k),
    }));
    let bindings = bindgen::Builder::default()
        .header(shim_header)
        .header("csrc/nc_reference.h")
        .clang_args(&clang_args)
        .allowlist_type("nc_.*")
        .allowlist_type("attr_t|chtype")
        .allowlist_var("_NC_.*")
        .allowlist_function("nc_.*")
        .opaque_type("_win_st")
        .default_enum_style(bindgen::EnumVariation::Consts)
        .prepend_enum_name(false)
        .layout_tests(false)
        .generate()
        .expect("Unable to generate ncurses bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let mut content = bindings.to_string();
    // Rust 2024 requires extern blocks to be unsafe
    content = content
        .replace("unsafe extern \"C\" {", "extern \"C\" {")
        .replace("extern \"C\" {", "unsafe extern \"C\" {");
    if content.contains("_NC_CCHARW_MAX") {
        println!("cargo:rustc-cfg=nc_ccharw_max");
    }
    std::fs::write(out_path.join("bindings.rs"), content).expect("Couldn't write bindings!");

    // Compile the shim and the reference unit
    let mut build = cc::Build::new();
    build
        .file("csrc/nc_shim.c")
        .file("csrc/nc_reference.c")
        .include("csrc")
        .flag_if_supported("-fPIC")
        .warnings(false);
    for dir in &include_dirs {
        build.include(dir);
    }
    for (k, v) in &defines {
        build.define(k, v.as_deref());
    }
    build.compile("ncurses_shim");

    if !probe.linked {
        for dir in &probe.link_dirs {
            println!("cargo:rustc-link-search=native={}", dir.display());
        }
        println!("cargo:rustc-link-lib={}", choice.variant.link_name());
    }

    if choice.variant == HeaderVariant::Wide {
        println!("cargo:rustc-cfg=nc_wide");
    }
    println!("cargo:rustc-env=NCURSES_SHIM_HEADER={}", choice.path.display());
    println!("cargo:rustc-env=NCURSES_SHIM_PROBE={}", probe.source);
}

//! Bootstrap file contents for fake Contao installations.
//!
//! The files mirror what a stock installation ships, reduced to the
//! statements the plugin reads.

/// `system/config/constants.php` of a Contao 3 installation.
pub fn constants_v3(version: &str, build: &str) -> String {
    format!(
        r#"<?php

/**
 * Contao Open Source CMS
 *
 * @package Core
 * @license LGPL-3.0+
 */


/**
 * Core version
 */
define('VERSION', '{version}');
define('BUILD', '{build}');
define('LONG_TERM_SUPPORT', true);


/**
 * Disable the request token check
 */
if (!defined('BYPASS_TOKEN_CHECK'))
{{
	define('BYPASS_TOKEN_CHECK', false);
}}
"#
    )
}

/// `system/constants.php` of a Contao 2 installation.
pub fn constants_v2(version: &str, build: &str) -> String {
    format!(
        r#"<?php if (!defined('TL_ROOT')) die('You cannot access this file directly!');

/**
 * Contao Open Source CMS
 * Copyright (C) 2005-2012 Leo Feyer
 */

/**
 * Version
 */
define('VERSION', '{version}');
define('BUILD', '{build}');

/**
 * Fix for PHP 5.3 namespaces
 */
define('TL_MODE', 'BE');
"#
    )
}

/// `system/config/default.php` of a Contao 3 installation.
pub const DEFAULT_CONFIG_V3: &str = r#"<?php

/**
 * Contao Open Source CMS
 */


/**
 * Website title
 */
$GLOBALS['TL_CONFIG']['websiteTitle'] = 'Contao Open Source CMS';


/**
 * Encoding and date formats
 */
$GLOBALS['TL_CONFIG']['characterSet'] = 'utf-8';
$GLOBALS['TL_CONFIG']['dateFormat']   = 'Y-m-d';
$GLOBALS['TL_CONFIG']['timeZone']     = ini_get('date.timezone') ?: 'GMT';


/**
 * Debug and cache
 */
$GLOBALS['TL_CONFIG']['debugMode']         = false;
$GLOBALS['TL_CONFIG']['bypassCache']       = false;
$GLOBALS['TL_CONFIG']['maxResultsPerPage'] = 500;
$GLOBALS['TL_CONFIG']['uploadTypes']       = 'jpg,jpeg,gif,png,pdf';
"#;

/// `system/config/config.php` of a Contao 2 installation.
pub const LEGACY_CONFIG_V2: &str = r#"<?php if (!defined('TL_ROOT')) die('You can not access this file directly!');

/**
 * Website title
 */
$GLOBALS['TL_CONFIG']['websiteTitle'] = 'Contao Open Source CMS';

/**
 * Encoding
 */
$GLOBALS['TL_CONFIG']['characterSet'] = 'utf-8';
$GLOBALS['TL_CONFIG']['displayErrors'] = false;
$GLOBALS['TL_CONFIG']['maxResultsPerPage'] = 500;
"#;

/// A `system/config/localconfig.php` overriding a few defaults.
pub fn localconfig(entries: &[(&str, &str)]) -> String {
    let mut source = String::from("<?php\n\n### INSTALL SCRIPT START ###\n");
    for (key, value) in entries {
        source.push_str(&format!("$GLOBALS['TL_CONFIG']['{key}'] = {value};\n"));
    }
    source.push_str("### INSTALL SCRIPT STOP ###\n");
    source
}
